use serde::{Deserialize, Serialize};

use crate::FieldName;

/// Identity fields shared by every role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDetails {
    pub name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub national_id: String,
    pub mobile: String,
    pub email: String,
    pub native_region: String,
    pub address: String,
    pub district: String,
    pub postal_code: String,
}

impl IdentityDetails {
    pub(crate) fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Name => &self.name,
            FieldName::Gender => &self.gender,
            FieldName::DateOfBirth => &self.date_of_birth,
            FieldName::NationalId => &self.national_id,
            FieldName::Mobile => &self.mobile,
            FieldName::Email => &self.email,
            FieldName::NativeRegion => &self.native_region,
            FieldName::Address => &self.address,
            FieldName::District => &self.district,
            FieldName::PostalCode => &self.postal_code,
            _ => return None,
        };
        Some(value)
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::Name => &mut self.name,
            FieldName::Gender => &mut self.gender,
            FieldName::DateOfBirth => &mut self.date_of_birth,
            FieldName::NationalId => &mut self.national_id,
            FieldName::Mobile => &mut self.mobile,
            FieldName::Email => &mut self.email,
            FieldName::NativeRegion => &mut self.native_region,
            FieldName::Address => &mut self.address,
            FieldName::District => &mut self.district,
            FieldName::PostalCode => &mut self.postal_code,
            _ => return None,
        };
        Some(value)
    }
}
