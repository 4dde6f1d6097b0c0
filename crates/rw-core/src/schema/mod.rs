//! Field schema registry: which fields each (role, step) owns and requires.
//!
//! 字段规则表：按角色与步骤给出必填字段与格式规则。纯函数，无状态。

mod rules;

pub use rules::{validate, validate_password_pair, MIN_PASSWORD_LEN};

use std::collections::BTreeSet;

use crate::draft::fields_of;
use crate::{FieldName, Role, Step};

const IDENTITY_FIELDS: [FieldName; 11] = [
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
];

const IDENTITY_REQUIRED: [FieldName; 8] = [
    FieldName::Name,
    FieldName::Gender,
    FieldName::DateOfBirth,
    FieldName::Mobile,
    FieldName::Address,
    FieldName::District,
    FieldName::PostalCode,
    FieldName::Photo,
];

const HEALTH_FIELDS: [FieldName; 7] = [
    FieldName::BloodGroup,
    FieldName::Height,
    FieldName::Weight,
    FieldName::HasDisability,
    FieldName::ChronicConditions,
    FieldName::Vaccinations,
    FieldName::PriorDiseases,
];

const HEALTH_REQUIRED: [FieldName; 3] = [FieldName::BloodGroup, FieldName::Height, FieldName::Weight];

const CREDENTIAL_FIELDS: [FieldName; 2] = [FieldName::Password, FieldName::ConfirmPassword];

/// Fields entered on `step` when `role` is active.
pub fn owned_fields(role: Role, step: Step) -> BTreeSet<FieldName> {
    match step {
        Step::RoleSelection => BTreeSet::from([FieldName::Role]),
        Step::BasicInfo => IDENTITY_FIELDS.into_iter().collect(),
        Step::HealthDetails => HEALTH_FIELDS.into_iter().collect(),
        Step::RoleSpecificDetails => fields_of(role)
            .iter()
            .copied()
            .chain(CREDENTIAL_FIELDS)
            .collect(),
        Step::Review => BTreeSet::new(),
    }
}

/// Fields that must hold a value before leaving `step` when `role` is active.
pub fn required_fields(role: Role, step: Step) -> BTreeSet<FieldName> {
    match step {
        Step::RoleSelection => BTreeSet::from([FieldName::Role]),
        Step::BasicInfo => {
            let mut fields: BTreeSet<_> = IDENTITY_REQUIRED.into_iter().collect();
            if role.requires_national_id() {
                fields.insert(FieldName::NationalId);
            }
            if role.requires_email() {
                fields.insert(FieldName::Email);
            }
            fields
        }
        Step::HealthDetails if role.requires_health_details() => {
            HEALTH_REQUIRED.into_iter().collect()
        }
        Step::HealthDetails => BTreeSet::new(),
        // Every role-specific field plus both credentials.
        Step::RoleSpecificDetails => owned_fields(role, step),
        Step::Review => BTreeSet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_fields_is_deterministic() {
        for role in Role::ALL {
            for step in Step::ALL {
                assert_eq!(required_fields(role, step), required_fields(role, step));
            }
        }
    }

    #[test]
    fn required_is_subset_of_owned() {
        for role in Role::ALL {
            for step in Step::ALL {
                let owned = owned_fields(role, step);
                assert!(required_fields(role, step).is_subset(&owned), "{role} {step}");
                for field in owned {
                    assert_eq!(field.step(), step, "{field} owned by {step}");
                }
            }
        }
    }

    #[test]
    fn national_id_and_email_depend_on_role() {
        let worker = required_fields(Role::Worker, Step::BasicInfo);
        assert!(worker.contains(&FieldName::NationalId));
        assert!(!worker.contains(&FieldName::Email));

        let doctor = required_fields(Role::Doctor, Step::BasicInfo);
        assert!(doctor.contains(&FieldName::Email));
        assert!(!doctor.contains(&FieldName::NationalId));

        let kiosk = required_fields(Role::KioskOperator, Step::BasicInfo);
        assert!(!kiosk.contains(&FieldName::Email));
        assert!(!kiosk.contains(&FieldName::NationalId));
        assert!(kiosk.contains(&FieldName::Photo));
    }

    #[test]
    fn health_required_only_for_worker_and_patient() {
        assert_eq!(required_fields(Role::Patient, Step::HealthDetails).len(), 3);
        assert!(required_fields(Role::Employer, Step::HealthDetails).is_empty());
    }

    #[test]
    fn patient_role_step_requires_only_credentials() {
        assert_eq!(
            required_fields(Role::Patient, Step::RoleSpecificDetails),
            BTreeSet::from([FieldName::Password, FieldName::ConfirmPassword])
        );
    }

    #[test]
    fn review_owns_nothing() {
        for role in Role::ALL {
            assert!(owned_fields(role, Step::Review).is_empty());
        }
    }
}
