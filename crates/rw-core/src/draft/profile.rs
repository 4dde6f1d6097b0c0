//! Role-specific sections of the draft.
//!
//! Each variant holds only the fields its role owns, so a profile can never
//! carry values left over from another role.

use serde::{Deserialize, Serialize};

use crate::{FieldName, Role};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerProfile {
    pub employment_type: String,
    pub employer_name: String,
    pub employer_contact: String,
    pub work_location: String,
    pub work_address: String,
    pub employment_duration: String,
    pub family_members: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub specialization: String,
    pub registration_number: String,
    pub workplace_name: String,
    pub workplace_address: String,
}

/// Patients have no role-specific fields beyond health details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployerProfile {
    pub company_name: String,
    pub company_address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KioskOperatorProfile {
    pub operator_id: String,
    pub center_name: String,
    pub center_location: String,
}

/// The active role together with its own fields.
///
/// Serialized untagged so it can be flattened into the wire payload next to `role`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RoleProfile {
    Worker(WorkerProfile),
    Doctor(DoctorProfile),
    Patient(PatientProfile),
    Employer(EmployerProfile),
    KioskOperator(KioskOperatorProfile),
}

impl RoleProfile {
    /// A profile for `role` with every field empty.
    pub fn empty(role: Role) -> Self {
        match role {
            Role::Worker => RoleProfile::Worker(WorkerProfile::default()),
            Role::Doctor => RoleProfile::Doctor(DoctorProfile::default()),
            Role::Patient => RoleProfile::Patient(PatientProfile::default()),
            Role::Employer => RoleProfile::Employer(EmployerProfile::default()),
            Role::KioskOperator => RoleProfile::KioskOperator(KioskOperatorProfile::default()),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Worker(_) => Role::Worker,
            RoleProfile::Doctor(_) => Role::Doctor,
            RoleProfile::Patient(_) => Role::Patient,
            RoleProfile::Employer(_) => Role::Employer,
            RoleProfile::KioskOperator(_) => Role::KioskOperator,
        }
    }

    /// Fields owned by this profile, in display order.
    pub fn fields(&self) -> &'static [FieldName] {
        fields_of(self.role())
    }

    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match (self, field) {
            (RoleProfile::Worker(p), FieldName::EmploymentType) => &p.employment_type,
            (RoleProfile::Worker(p), FieldName::EmployerName) => &p.employer_name,
            (RoleProfile::Worker(p), FieldName::EmployerContact) => &p.employer_contact,
            (RoleProfile::Worker(p), FieldName::WorkLocation) => &p.work_location,
            (RoleProfile::Worker(p), FieldName::WorkAddress) => &p.work_address,
            (RoleProfile::Worker(p), FieldName::EmploymentDuration) => &p.employment_duration,
            (RoleProfile::Worker(p), FieldName::FamilyMembers) => &p.family_members,
            (RoleProfile::Doctor(p), FieldName::Specialization) => &p.specialization,
            (RoleProfile::Doctor(p), FieldName::RegistrationNumber) => &p.registration_number,
            (RoleProfile::Doctor(p), FieldName::WorkplaceName) => &p.workplace_name,
            (RoleProfile::Doctor(p), FieldName::WorkplaceAddress) => &p.workplace_address,
            (RoleProfile::Employer(p), FieldName::CompanyName) => &p.company_name,
            (RoleProfile::Employer(p), FieldName::CompanyAddress) => &p.company_address,
            (RoleProfile::KioskOperator(p), FieldName::OperatorId) => &p.operator_id,
            (RoleProfile::KioskOperator(p), FieldName::CenterName) => &p.center_name,
            (RoleProfile::KioskOperator(p), FieldName::CenterLocation) => &p.center_location,
            _ => return None,
        };
        Some(value)
    }

    pub(crate) fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match (self, field) {
            (RoleProfile::Worker(p), FieldName::EmploymentType) => &mut p.employment_type,
            (RoleProfile::Worker(p), FieldName::EmployerName) => &mut p.employer_name,
            (RoleProfile::Worker(p), FieldName::EmployerContact) => &mut p.employer_contact,
            (RoleProfile::Worker(p), FieldName::WorkLocation) => &mut p.work_location,
            (RoleProfile::Worker(p), FieldName::WorkAddress) => &mut p.work_address,
            (RoleProfile::Worker(p), FieldName::EmploymentDuration) => {
                &mut p.employment_duration
            }
            (RoleProfile::Worker(p), FieldName::FamilyMembers) => &mut p.family_members,
            (RoleProfile::Doctor(p), FieldName::Specialization) => &mut p.specialization,
            (RoleProfile::Doctor(p), FieldName::RegistrationNumber) => {
                &mut p.registration_number
            }
            (RoleProfile::Doctor(p), FieldName::WorkplaceName) => &mut p.workplace_name,
            (RoleProfile::Doctor(p), FieldName::WorkplaceAddress) => &mut p.workplace_address,
            (RoleProfile::Employer(p), FieldName::CompanyName) => &mut p.company_name,
            (RoleProfile::Employer(p), FieldName::CompanyAddress) => &mut p.company_address,
            (RoleProfile::KioskOperator(p), FieldName::OperatorId) => &mut p.operator_id,
            (RoleProfile::KioskOperator(p), FieldName::CenterName) => &mut p.center_name,
            (RoleProfile::KioskOperator(p), FieldName::CenterLocation) => {
                &mut p.center_location
            }
            _ => return None,
        };
        Some(value)
    }
}

/// Role-specific fields of `role`, in display order.
pub fn fields_of(role: Role) -> &'static [FieldName] {
    match role {
        Role::Worker => &[
            FieldName::EmploymentType,
            FieldName::EmployerName,
            FieldName::EmployerContact,
            FieldName::WorkLocation,
            FieldName::WorkAddress,
            FieldName::EmploymentDuration,
            FieldName::FamilyMembers,
        ],
        Role::Doctor => &[
            FieldName::Specialization,
            FieldName::RegistrationNumber,
            FieldName::WorkplaceName,
            FieldName::WorkplaceAddress,
        ],
        Role::Patient => &[],
        Role::Employer => &[FieldName::CompanyName, FieldName::CompanyAddress],
        Role::KioskOperator => &[
            FieldName::OperatorId,
            FieldName::CenterName,
            FieldName::CenterLocation,
        ],
    }
}
