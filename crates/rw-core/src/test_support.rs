//! Fixtures shared by the wizard crates' tests.
//!
//! Enabled inside rw-core tests and through the `test-support` feature.

use crate::draft::fields_of;
use crate::photo::{MimeType, PhotoFile};
use crate::validation::validate_all;
use crate::{Draft, FieldName, FieldValue, RegistrationRequest, Role};

const SHARED_VALUES: [(FieldName, &str); 14] = [
    (FieldName::Name, "Anu Thomas"),
    (FieldName::Gender, "Female"),
    (FieldName::DateOfBirth, "1994-03-12"),
    (FieldName::NationalId, "123456789012"),
    (FieldName::Mobile, "9876543210"),
    (FieldName::Email, "anu@example.in"),
    (FieldName::Address, "12 Market Road"),
    (FieldName::District, "Thiruvananthapuram"),
    (FieldName::PostalCode, "695001"),
    (FieldName::BloodGroup, "O+"),
    (FieldName::Height, "162"),
    (FieldName::Weight, "58"),
    (FieldName::Password, "secret1"),
    (FieldName::ConfirmPassword, "secret1"),
];

fn profile_value(field: FieldName) -> &'static str {
    match field {
        FieldName::EmploymentType => "Construction",
        FieldName::EmployerName => "Acme Builders",
        FieldName::EmployerContact => "9123456780",
        FieldName::WorkLocation => "Kochi",
        FieldName::WorkAddress => "Site 4, Marine Drive",
        FieldName::EmploymentDuration => "1 - 3 years",
        FieldName::FamilyMembers => "3",
        FieldName::Specialization => "Cardiology",
        FieldName::RegistrationNumber => "KMC-20417",
        FieldName::WorkplaceName => "City Hospital",
        FieldName::WorkplaceAddress => "MG Road",
        FieldName::CompanyName => "Acme Builders",
        FieldName::CompanyAddress => "Industrial Estate, Kollam",
        FieldName::OperatorId => "KIOSK-07",
        FieldName::CenterName => "Community Health Center",
        FieldName::CenterLocation => "Kollam",
        _ => "filled",
    }
}

/// Valid text values for every field `role` requires, photo excluded.
pub fn complete_values(role: Role) -> Vec<(FieldName, FieldValue)> {
    SHARED_VALUES
        .into_iter()
        .chain(fields_of(role).iter().map(|field| (*field, profile_value(*field))))
        .map(|(field, value)| (field, FieldValue::text(value)))
        .collect()
}

/// A PNG-typed photo; the bytes are not a decodable image.
pub fn png(name: &str) -> PhotoFile {
    PhotoFile::new(name, MimeType::new("image/png"), b"fake-png-bytes".to_vec())
}

/// A draft that passes every step for `role`.
pub fn complete_draft(role: Role) -> Draft {
    let mut draft = Draft::new();
    draft.set_role(role);
    for (field, value) in complete_values(role) {
        draft
            .update(field, value)
            .unwrap_or_else(|err| panic!("fixture value for {field} rejected: {err}"));
    }
    draft.set_photo(png("anu.png"));
    draft
}

/// The request a complete `role` draft serializes to.
pub fn complete_request(role: Role) -> RegistrationRequest {
    let draft = complete_draft(role);
    let validated = validate_all(&draft)
        .unwrap_or_else(|blocked| panic!("fixture draft blocked at {}", blocked.step));
    RegistrationRequest::from_validated(validated)
}
