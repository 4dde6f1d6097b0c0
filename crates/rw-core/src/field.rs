//! Field names and values accepted by the draft.
//!
//! 草稿字段名与字段值。

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{Role, Step};

/// Every field the wizard collects, across all roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    Role,

    // Identity
    Name,
    Gender,
    DateOfBirth,
    NationalId,
    Mobile,
    Email,
    NativeRegion,
    Address,
    District,
    PostalCode,
    Photo,

    // Health
    BloodGroup,
    Height,
    Weight,
    HasDisability,
    ChronicConditions,
    Vaccinations,
    PriorDiseases,

    // Worker
    EmploymentType,
    EmployerName,
    EmployerContact,
    WorkLocation,
    WorkAddress,
    EmploymentDuration,
    FamilyMembers,

    // Doctor
    Specialization,
    RegistrationNumber,
    WorkplaceName,
    WorkplaceAddress,

    // Employer
    CompanyName,
    CompanyAddress,

    // Kiosk operator
    OperatorId,
    CenterName,
    CenterLocation,

    // Credentials
    Password,
    ConfirmPassword,
}

/// How a field's value is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Choice,
    Text,
    Flag,
    TagSet,
    Photo,
}

/// Which part of the draft holds a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOwner {
    Selection,
    Identity,
    Health,
    Profile(Role),
    Credentials,
}

/// A value submitted for a field through `Draft::update`.
///
/// Tag fields are toggled, never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Tag { tag: String, checked: bool },
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn checked(tag: impl Into<String>) -> Self {
        FieldValue::Tag {
            tag: tag.into(),
            checked: true,
        }
    }

    pub fn unchecked(tag: impl Into<String>) -> Self {
        FieldValue::Tag {
            tag: tag.into(),
            checked: false,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Flag(_) => FieldKind::Flag,
            FieldValue::Tag { .. } => FieldKind::TagSet,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FieldName {
    pub const ALL: [FieldName; 37] = [
        FieldName::Role,
        FieldName::Name,
        FieldName::Gender,
        FieldName::DateOfBirth,
        FieldName::NationalId,
        FieldName::Mobile,
        FieldName::Email,
        FieldName::NativeRegion,
        FieldName::Address,
        FieldName::District,
        FieldName::PostalCode,
        FieldName::Photo,
        FieldName::BloodGroup,
        FieldName::Height,
        FieldName::Weight,
        FieldName::HasDisability,
        FieldName::ChronicConditions,
        FieldName::Vaccinations,
        FieldName::PriorDiseases,
        FieldName::EmploymentType,
        FieldName::EmployerName,
        FieldName::EmployerContact,
        FieldName::WorkLocation,
        FieldName::WorkAddress,
        FieldName::EmploymentDuration,
        FieldName::FamilyMembers,
        FieldName::Specialization,
        FieldName::RegistrationNumber,
        FieldName::WorkplaceName,
        FieldName::WorkplaceAddress,
        FieldName::CompanyName,
        FieldName::CompanyAddress,
        FieldName::OperatorId,
        FieldName::CenterName,
        FieldName::CenterLocation,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// camelCase key used on the wire and in answers files.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FieldName::Role => "role",
            FieldName::Name => "name",
            FieldName::Gender => "gender",
            FieldName::DateOfBirth => "dateOfBirth",
            FieldName::NationalId => "nationalId",
            FieldName::Mobile => "mobile",
            FieldName::Email => "email",
            FieldName::NativeRegion => "nativeRegion",
            FieldName::Address => "address",
            FieldName::District => "district",
            FieldName::PostalCode => "postalCode",
            FieldName::Photo => "photo",
            FieldName::BloodGroup => "bloodGroup",
            FieldName::Height => "height",
            FieldName::Weight => "weight",
            FieldName::HasDisability => "hasDisability",
            FieldName::ChronicConditions => "chronicConditions",
            FieldName::Vaccinations => "vaccinations",
            FieldName::PriorDiseases => "priorDiseases",
            FieldName::EmploymentType => "employmentType",
            FieldName::EmployerName => "employerName",
            FieldName::EmployerContact => "employerContact",
            FieldName::WorkLocation => "workLocation",
            FieldName::WorkAddress => "workAddress",
            FieldName::EmploymentDuration => "employmentDuration",
            FieldName::FamilyMembers => "familyMembers",
            FieldName::Specialization => "specialization",
            FieldName::RegistrationNumber => "registrationNumber",
            FieldName::WorkplaceName => "workplaceName",
            FieldName::WorkplaceAddress => "workplaceAddress",
            FieldName::CompanyName => "companyName",
            FieldName::CompanyAddress => "companyAddress",
            FieldName::OperatorId => "operatorId",
            FieldName::CenterName => "centerName",
            FieldName::CenterLocation => "centerLocation",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human label used in error messages and the review summary.
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::Role => "Role",
            FieldName::Name => "Full name",
            FieldName::Gender => "Gender",
            FieldName::DateOfBirth => "Date of birth",
            FieldName::NationalId => "National ID",
            FieldName::Mobile => "Mobile number",
            FieldName::Email => "Email",
            FieldName::NativeRegion => "Native region",
            FieldName::Address => "Address",
            FieldName::District => "District",
            FieldName::PostalCode => "Postal code",
            FieldName::Photo => "Profile photo",
            FieldName::BloodGroup => "Blood group",
            FieldName::Height => "Height (cm)",
            FieldName::Weight => "Weight (kg)",
            FieldName::HasDisability => "Disability",
            FieldName::ChronicConditions => "Chronic conditions",
            FieldName::Vaccinations => "Vaccinations",
            FieldName::PriorDiseases => "Prior diseases",
            FieldName::EmploymentType => "Employment type",
            FieldName::EmployerName => "Employer name",
            FieldName::EmployerContact => "Employer contact",
            FieldName::WorkLocation => "Work location",
            FieldName::WorkAddress => "Work address",
            FieldName::EmploymentDuration => "Employment duration",
            FieldName::FamilyMembers => "Family members",
            FieldName::Specialization => "Specialization",
            FieldName::RegistrationNumber => "Registration number",
            FieldName::WorkplaceName => "Workplace name",
            FieldName::WorkplaceAddress => "Workplace address",
            FieldName::CompanyName => "Company name",
            FieldName::CompanyAddress => "Company address",
            FieldName::OperatorId => "Operator ID",
            FieldName::CenterName => "Center name",
            FieldName::CenterLocation => "Center location",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm password",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::Role => FieldKind::Choice,
            FieldName::Photo => FieldKind::Photo,
            FieldName::HasDisability => FieldKind::Flag,
            FieldName::ChronicConditions | FieldName::Vaccinations => FieldKind::TagSet,
            _ => FieldKind::Text,
        }
    }

    pub fn owner(&self) -> FieldOwner {
        match self {
            FieldName::Role => FieldOwner::Selection,
            FieldName::Name
            | FieldName::Gender
            | FieldName::DateOfBirth
            | FieldName::NationalId
            | FieldName::Mobile
            | FieldName::Email
            | FieldName::NativeRegion
            | FieldName::Address
            | FieldName::District
            | FieldName::PostalCode
            | FieldName::Photo => FieldOwner::Identity,
            FieldName::BloodGroup
            | FieldName::Height
            | FieldName::Weight
            | FieldName::HasDisability
            | FieldName::ChronicConditions
            | FieldName::Vaccinations
            | FieldName::PriorDiseases => FieldOwner::Health,
            FieldName::EmploymentType
            | FieldName::EmployerName
            | FieldName::EmployerContact
            | FieldName::WorkLocation
            | FieldName::WorkAddress
            | FieldName::EmploymentDuration
            | FieldName::FamilyMembers => FieldOwner::Profile(Role::Worker),
            FieldName::Specialization
            | FieldName::RegistrationNumber
            | FieldName::WorkplaceName
            | FieldName::WorkplaceAddress => FieldOwner::Profile(Role::Doctor),
            FieldName::CompanyName | FieldName::CompanyAddress => {
                FieldOwner::Profile(Role::Employer)
            }
            FieldName::OperatorId | FieldName::CenterName | FieldName::CenterLocation => {
                FieldOwner::Profile(Role::KioskOperator)
            }
            FieldName::Password | FieldName::ConfirmPassword => FieldOwner::Credentials,
        }
    }

    /// The step on which this field is entered.
    pub fn step(&self) -> Step {
        match self.owner() {
            FieldOwner::Selection => Step::RoleSelection,
            FieldOwner::Identity => Step::BasicInfo,
            FieldOwner::Health => Step::HealthDetails,
            FieldOwner::Profile(_) | FieldOwner::Credentials => Step::RoleSpecificDetails,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
