//! Input validation for naming components.
//!
//! Stack and parameter names are derived by joining components with a
//! reserved separator, so the components themselves must never contain
//! it. That legality check lives here at the configuration boundary;
//! the naming module itself stays validation-free.

use crate::core::naming::SEPARATOR;
use crate::error::{Result, ValidationError};

/// Validate a naming component (namespace, service, or environment).
///
/// Components must be lowercase alphanumeric:
/// - Only a-z and 0-9
/// - Cannot start with a digit
/// - Cannot be empty
/// - Cannot contain the reserved `-` separator
///
/// # Arguments
///
/// * `field` - Which component this is, for error messages
/// * `name` - The component value to validate
///
/// # Errors
///
/// Returns `ValidationError` if the component is illegal.
pub fn validate_component(field: &'static str, name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName { field }.into());
    }

    if let Some(first_char) = name.chars().next() {
        if first_char.is_ascii_digit() {
            return Err(ValidationError::InvalidName {
                field,
                name: name.to_string(),
                reason: "cannot start with a digit".to_string(),
            }
            .into());
        }
    }

    for (i, ch) in name.chars().enumerate() {
        if ch == SEPARATOR {
            return Err(ValidationError::InvalidName {
                field,
                name: name.to_string(),
                reason: format!(
                    "'{}' is reserved as the stack name separator",
                    SEPARATOR
                ),
            }
            .into());
        }
        if !ch.is_ascii_lowercase() && !ch.is_ascii_digit() {
            return Err(ValidationError::InvalidName {
                field,
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only lowercase a-z and 0-9 are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a password value.
///
/// Passwords cannot be empty; everything else is opaque to gantry.
pub fn validate_password(value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }

    Ok(())
}
