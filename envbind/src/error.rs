//! Error types for environment variable loading

/// Errors that can occur while loading a struct from environment variables.
///
/// A load stops at the first error and returns it; fields written before the
/// failing one keep their values.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// An `#[env(...)]` annotation carries an option token other than
    /// `required`, `-`, or the empty string.
    #[error("unrecognized option '{option}' in #[env(...)] attribute")]
    InvalidOption {
        /// The offending option token
        option: String,
    },

    /// A field marked `required` has no matching environment variable.
    #[error("environment variable '{name}' is required but not set")]
    MissingRequired {
        /// Name of the missing environment variable
        name: String,
    },

    /// The value is not one of the recognized boolean literals
    /// (`1`, `t`, `T`, `true`, `TRUE`, `True` and their false counterparts).
    #[error("environment variable '{name}' is not a valid boolean")]
    InvalidBoolean {
        /// Name of the environment variable being coerced
        name: String,
    },

    /// The value is not a base-10 signed 64-bit integer, or is out of range.
    #[error("environment variable '{name}' is not a valid integer")]
    InvalidInteger {
        /// Name of the environment variable being coerced
        name: String,
    },

    /// The value is not a decimal or scientific floating point number.
    #[error("environment variable '{name}' is not a valid floating point number")]
    InvalidFloat {
        /// Name of the environment variable being coerced
        name: String,
    },

    /// The field's declared type has no coercion rule.
    ///
    /// Supported types are `String`, `bool`, `i64`, `f32`, and `f64`.
    #[error("unsupported type '{type_name}' for field '{field}'")]
    UnsupportedType {
        /// Name of the field that could not be loaded
        field: String,
        /// Declared type of that field
        type_name: String,
    },
}

impl EnvError {
    pub(crate) fn invalid_option(option: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
        }
    }

    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingRequired { name: name.into() }
    }

    pub(crate) fn invalid_boolean(name: impl Into<String>) -> Self {
        Self::InvalidBoolean { name: name.into() }
    }

    pub(crate) fn invalid_integer(name: impl Into<String>) -> Self {
        Self::InvalidInteger { name: name.into() }
    }

    pub(crate) fn invalid_float(name: impl Into<String>) -> Self {
        Self::InvalidFloat { name: name.into() }
    }

    /// Create an unsupported-type error (used by macro-generated code)
    #[doc(hidden)]
    pub fn unsupported_type(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            field: field.into(),
            type_name: type_name.into(),
        }
    }
}
