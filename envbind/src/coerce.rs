//! Environment lookup and string-to-value coercion
//!
//! These functions are called by `#[derive(EnvBind)]` generated code, one
//! `lookup` + one parser per processed field.

use std::env;

use crate::binding::Binding;
use crate::error::EnvError;

/// Read the bound environment variable.
///
/// An absent variable yields the empty string unless the binding is marked
/// required. Values that are not valid unicode are treated as absent.
#[doc(hidden)]
pub fn lookup(binding: &Binding) -> Result<String, EnvError> {
    match env::var(&binding.name) {
        Ok(value) => Ok(value),
        Err(_) if binding.required => Err(EnvError::missing(&binding.name)),
        Err(_) => Ok(String::new()),
    }
}

#[doc(hidden)]
pub fn string(_name: &str, raw: &str) -> Result<String, EnvError> {
    Ok(raw.to_string())
}

/// Parse the boolean literal grammar: `1`, `t`, `T`, `true`, `TRUE`, `True`
/// and their false counterparts.
#[doc(hidden)]
pub fn boolean(name: &str, raw: &str) -> Result<bool, EnvError> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(EnvError::invalid_boolean(name)),
    }
}

#[doc(hidden)]
pub fn integer(name: &str, raw: &str) -> Result<i64, EnvError> {
    raw.parse::<i64>()
        .map_err(|_| EnvError::invalid_integer(name))
}

#[doc(hidden)]
pub fn float32(name: &str, raw: &str) -> Result<f32, EnvError> {
    raw.parse::<f32>().map_err(|_| EnvError::invalid_float(name))
}

#[doc(hidden)]
pub fn float64(name: &str, raw: &str) -> Result<f64, EnvError> {
    raw.parse::<f64>().map_err(|_| EnvError::invalid_float(name))
}
