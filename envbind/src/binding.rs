//! Field resolution: annotation text + mode -> environment variable binding

use crate::case::to_upper_snake_case;
use crate::error::EnvError;

/// Controls which fields a load considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Only fields with an `#[env(...)]` annotation are processed.
    Strict,
    /// Every field not skip-marked is processed; unannotated fields read
    /// from the upper-snake-case of their identifier.
    Lazy,
}

/// The resolved environment variable binding for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Environment variable name to look up
    pub name: String,
    /// Whether an absent variable aborts the load
    pub required: bool,
}

/// Resolve a field's binding from its identifier and raw annotation text.
///
/// Returns `Ok(None)` when the field is to be skipped: skip-marked (`-`),
/// or unannotated (or annotated with an empty name) in strict mode. Skip
/// decisions are made before option tokens are inspected, so a skipped
/// field never reports an option error.
pub fn resolve_field(
    ident: &str,
    annotation: Option<&str>,
    mode: Mode,
) -> Result<Option<Binding>, EnvError> {
    let Some(annotation) = annotation else {
        return Ok(match mode {
            Mode::Strict => None,
            Mode::Lazy => Some(Binding {
                name: to_upper_snake_case(ident),
                required: false,
            }),
        });
    };

    let mut tokens = annotation.split(',');
    // split always yields a first token, possibly empty
    let name = match tokens.next().unwrap_or_default() {
        "-" => return Ok(None),
        "" => match mode {
            Mode::Strict => return Ok(None),
            Mode::Lazy => to_upper_snake_case(ident),
        },
        explicit => explicit.to_string(),
    };

    let mut required = false;
    for option in tokens {
        match option {
            "required" => required = true,
            "" | "-" => {}
            other => return Err(EnvError::invalid_option(other)),
        }
    }

    Ok(Some(Binding { name, required }))
}
