//! Format rules for individual field values.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::validation::FieldError;
use crate::FieldName;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

// ASCII digits only; `\d` would also accept other Unicode decimal digits.
static NATIONAL_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{12}$").unwrap());
static MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());
static POSTAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check the format of one entered value.
///
/// Presence is not checked here; fields without a format rule always pass.
pub fn validate(field: FieldName, value: &str) -> Result<(), FieldError> {
    match field {
        FieldName::NationalId if !NATIONAL_ID.is_match(value) => Err(FieldError::InvalidNationalId),
        FieldName::Mobile if !MOBILE.is_match(value) => Err(FieldError::InvalidMobile),
        FieldName::PostalCode if !POSTAL_CODE.is_match(value) => Err(FieldError::InvalidPostalCode),
        FieldName::Email if !EMAIL.is_match(value) => Err(FieldError::InvalidEmail),
        FieldName::Password if value.chars().count() < MIN_PASSWORD_LEN => {
            Err(FieldError::PasswordTooShort {
                min_len: MIN_PASSWORD_LEN,
            })
        }
        _ => Ok(()),
    }
}

/// Password and confirmation must be identical.
pub fn validate_password_pair(password: &str, confirm: &str) -> Result<(), FieldError> {
    if password == confirm {
        Ok(())
    } else {
        Err(FieldError::PasswordMismatch)
    }
}
