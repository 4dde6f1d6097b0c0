//! Option lists offered by front ends for choice and tag fields.
//!
//! Presentation only: values outside these lists are not rejected.

use crate::FieldName;

pub const GENDERS: &[&str] = &["Male", "Female", "Other"];

pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const EMPLOYMENT_TYPES: &[&str] = &["Construction", "Agriculture", "Domestic", "Factory", "Other"];

pub const EMPLOYMENT_DURATIONS: &[&str] = &[
    "Less than 6 months",
    "6 months - 1 year",
    "1 - 3 years",
    "More than 3 years",
];

pub const CHRONIC_CONDITIONS: &[&str] = &[
    "Diabetes",
    "Hypertension",
    "Asthma",
    "Heart Disease",
    "Tuberculosis",
];

pub const VACCINATIONS: &[&str] = &["COVID-19", "Tetanus", "Hepatitis B", "Polio", "MMR"];

/// Suggested options for `field`, or `None` for free-form fields.
pub fn options_for(field: FieldName) -> Option<&'static [&'static str]> {
    match field {
        FieldName::Gender => Some(GENDERS),
        FieldName::BloodGroup => Some(BLOOD_GROUPS),
        FieldName::EmploymentType => Some(EMPLOYMENT_TYPES),
        FieldName::EmploymentDuration => Some(EMPLOYMENT_DURATIONS),
        FieldName::ChronicConditions => Some(CHRONIC_CONDITIONS),
        FieldName::Vaccinations => Some(VACCINATIONS),
        _ => None,
    }
}
