//! Draft store: the single in-progress registration record.
//!
//! 注册草稿：跨步骤累积的唯一可变记录。
//!
//! Shared identity/health/credential sections live next to an optional
//! [`RoleProfile`] tagged by role. Switching role swaps the profile for the new
//! role's empty variant, so every field the old role owned is reset and nothing
//! else is touched.

mod credentials;
mod health;
mod identity;
mod profile;

pub use credentials::Credentials;
pub use health::{HealthDetails, TagSet};
pub use identity::IdentityDetails;
pub use profile::{
    fields_of, DoctorProfile, EmployerProfile, KioskOperatorProfile, PatientProfile, RoleProfile,
    WorkerProfile,
};

use thiserror::Error;

use crate::field::{FieldKind, FieldOwner, FieldValue};
use crate::photo::PhotoFile;
use crate::{FieldName, Role};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("{field} is set through its own operation")]
    DedicatedOperation { field: FieldName },

    #[error("{field} expects a {expected:?} value, got {actual:?}")]
    ValueKindMismatch {
        field: FieldName,
        expected: FieldKind,
        actual: FieldKind,
    },

    #[error("{field} does not belong to the selected role")]
    NotInActiveProfile { field: FieldName },
}

/// What `set_role` did to the role-specific section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleSwitch {
    /// First selection, or a different role: the profile starts empty.
    Reset { previous: Option<Role> },
    /// Same role re-selected: the profile is kept.
    Unchanged,
}

#[derive(Debug, Default)]
pub struct Draft {
    identity: IdentityDetails,
    health: HealthDetails,
    profile: Option<RoleProfile>,
    credentials: Credentials,
    photo: Option<PhotoFile>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn role(&self) -> Option<Role> {
        self.profile.as_ref().map(RoleProfile::role)
    }

    pub fn identity(&self) -> &IdentityDetails {
        &self.identity
    }

    pub fn health(&self) -> &HealthDetails {
        &self.health
    }

    pub fn profile(&self) -> Option<&RoleProfile> {
        self.profile.as_ref()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn photo(&self) -> Option<&PhotoFile> {
        self.photo.as_ref()
    }

    /// Merge one value into the draft.
    ///
    /// Tag fields toggle membership; every other field is overwritten.
    pub fn update(&mut self, field: FieldName, value: FieldValue) -> Result<(), DraftError> {
        match field.kind() {
            FieldKind::Choice | FieldKind::Photo => {
                return Err(DraftError::DedicatedOperation { field })
            }
            expected if expected != value.kind() => {
                return Err(DraftError::ValueKindMismatch {
                    field,
                    expected,
                    actual: value.kind(),
                })
            }
            _ => {}
        }

        match value {
            FieldValue::Flag(flag) => {
                // HasDisability is the only flag.
                self.health.has_disability = flag;
            }
            FieldValue::Tag { tag, checked } => {
                if let Some(tags) = self.health.tags_mut(field) {
                    tags.toggle(&tag, checked);
                }
            }
            FieldValue::Text(text) => match field {
                FieldName::Password => self.credentials.password.replace(text),
                FieldName::ConfirmPassword => self.credentials.confirm_password.replace(text),
                _ => *self.text_slot(field)? = text,
            },
        }
        Ok(())
    }

    /// Activate `role`. A different role replaces the role-specific section with an empty one.
    pub fn set_role(&mut self, role: Role) -> RoleSwitch {
        let previous = self.role();
        if previous == Some(role) {
            return RoleSwitch::Unchanged;
        }
        self.profile = Some(RoleProfile::empty(role));
        #[cfg(feature = "tracing")]
        tracing::debug!(?previous, %role, "draft role switched, role section reset");
        RoleSwitch::Reset { previous }
    }

    /// Reset the given fields to their defaults. Fields outside the active profile are ignored.
    pub fn clear_fields(&mut self, fields: &[FieldName]) {
        for field in fields {
            match field.kind() {
                FieldKind::Choice => self.profile = None,
                FieldKind::Photo => self.photo = None,
                FieldKind::Flag => self.health.has_disability = false,
                FieldKind::TagSet => {
                    if let Some(tags) = self.health.tags_mut(*field) {
                        tags.clear();
                    }
                }
                FieldKind::Text => match field {
                    FieldName::Password => self.credentials.password.replace(String::new()),
                    FieldName::ConfirmPassword => {
                        self.credentials.confirm_password.replace(String::new())
                    }
                    _ => {
                        if let Ok(slot) = self.text_slot(*field) {
                            slot.clear();
                        }
                    }
                },
            }
        }
    }

    /// Discard everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Text value of a field, if the draft can hold it under the active role.
    pub fn text_value(&self, field: FieldName) -> Option<&str> {
        match field.owner() {
            FieldOwner::Selection => self.role().map(|role| role.as_str()),
            FieldOwner::Identity => self.identity.text(field),
            FieldOwner::Health => self.health.text(field),
            FieldOwner::Profile(_) => self.profile.as_ref()?.text(field),
            FieldOwner::Credentials => Some(match field {
                FieldName::Password => self.credentials.password.expose(),
                _ => self.credentials.confirm_password.expose(),
            }),
        }
    }

    /// Whether a field holds something a required-field check accepts.
    ///
    /// Whitespace-only text counts as empty; an unset flag or empty tag set counts as empty.
    pub fn has_value(&self, field: FieldName) -> bool {
        match field.kind() {
            FieldKind::Choice => self.profile.is_some(),
            FieldKind::Photo => self.photo.is_some(),
            FieldKind::Flag => self.health.has_disability,
            FieldKind::TagSet => self.health.tags(field).is_some_and(|tags| !tags.is_empty()),
            FieldKind::Text => self
                .text_value(field)
                .is_some_and(|value| !value.trim().is_empty()),
        }
    }

    pub(crate) fn set_photo(&mut self, photo: PhotoFile) {
        self.photo = Some(photo);
    }

    fn text_slot(&mut self, field: FieldName) -> Result<&mut String, DraftError> {
        let slot = match field.owner() {
            FieldOwner::Identity => self.identity.text_mut(field),
            FieldOwner::Health => self.health.text_mut(field),
            FieldOwner::Profile(_) => self
                .profile
                .as_mut()
                .and_then(|profile| profile.text_mut(field)),
            // Credentials go through SecretString::replace so the old value is zeroized.
            FieldOwner::Credentials | FieldOwner::Selection => None,
        };
        slot.ok_or(DraftError::NotInActiveProfile { field })
    }
}
