use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::FieldName;

/// Why one field blocks its step. The message is shown beside the field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: &'static str },

    #[error("Please select a role")]
    RoleNotSelected,

    #[error("National ID must be exactly 12 digits")]
    InvalidNationalId,

    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobile,

    #[error("Postal code must be exactly 6 digits")]
    InvalidPostalCode,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min_len} characters")]
    PasswordTooShort { min_len: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

impl FieldError {
    pub fn required(field: FieldName) -> Self {
        FieldError::Required {
            label: field.label(),
        }
    }
}

/// Errors of the displayed step, keyed by field.
///
/// Serializes as `{ "<wireName>": "<message>" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first error recorded for a field wins.
    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.entry(field).or_insert(error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Drop the error of a field whose value just changed.
    pub fn clear(&mut self, field: FieldName) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.wire_name(), &error.to_string())?;
        }
        map.end()
    }
}
