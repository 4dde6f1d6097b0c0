//! Step validator.
//!
//! Evaluates the schema rules of one step against the draft and collects every
//! problem in a single pass. Validation never mutates the draft; a blocked step
//! is a value, not an error.

mod errors;

pub use errors::{FieldError, ValidationErrors};

use crate::draft::{Draft, RoleProfile};
use crate::photo::PhotoFile;
use crate::schema;
use crate::{FieldName, Role, Step};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Passed,
    Blocked { errors: ValidationErrors },
}

impl StepOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, StepOutcome::Passed)
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            StepOutcome::Passed => None,
            StepOutcome::Blocked { errors } => Some(errors),
        }
    }

    fn from_errors(errors: ValidationErrors) -> Self {
        if errors.is_empty() {
            StepOutcome::Passed
        } else {
            StepOutcome::Blocked { errors }
        }
    }
}

/// First step that failed while validating the whole draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedStep {
    pub step: Step,
    pub errors: ValidationErrors,
}

/// A draft for which every step passed. Only [`validate_all`] creates one.
///
/// 已通过全部步骤校验的草稿凭证，提交只接受此类型。
#[derive(Debug, Clone, Copy)]
pub struct ValidatedDraft<'a> {
    draft: &'a Draft,
    profile: &'a RoleProfile,
    photo: &'a PhotoFile,
}

impl<'a> ValidatedDraft<'a> {
    pub fn draft(&self) -> &'a Draft {
        self.draft
    }

    pub fn role(&self) -> Role {
        self.profile.role()
    }

    pub fn profile(&self) -> &'a RoleProfile {
        self.profile
    }

    pub fn photo(&self) -> &'a PhotoFile {
        self.photo
    }
}

/// Validate the fields `step` owns under the draft's active role.
pub fn validate_step(step: Step, draft: &Draft) -> StepOutcome {
    let mut errors = ValidationErrors::new();

    let Some(role) = draft.role() else {
        if step != Step::Review {
            errors.insert(FieldName::Role, FieldError::RoleNotSelected);
        }
        return StepOutcome::from_errors(errors);
    };

    for field in schema::required_fields(role, step) {
        if !draft.has_value(field) {
            errors.insert(field, FieldError::required(field));
        }
    }

    let owned = schema::owned_fields(role, step);
    // Blank text counts as absent here too, so optional fields are only format-checked when present.
    for field in owned.iter().filter(|field| draft.has_value(**field)) {
        if let Some(value) = draft.text_value(*field) {
            if let Err(error) = schema::validate(*field, value) {
                errors.insert(*field, error);
            }
        }
    }

    if owned.contains(&FieldName::ConfirmPassword) {
        let credentials = draft.credentials();
        if !credentials.confirm_password.is_empty() {
            if let Err(error) = schema::validate_password_pair(
                credentials.password.expose(),
                credentials.confirm_password.expose(),
            ) {
                errors.insert(FieldName::ConfirmPassword, error);
            }
        }
    }

    StepOutcome::from_errors(errors)
}

/// Validate every step in order; the draft is submittable only if all pass.
pub fn validate_all(draft: &Draft) -> Result<ValidatedDraft<'_>, BlockedStep> {
    for step in Step::ALL {
        if let StepOutcome::Blocked { errors } = validate_step(step, draft) {
            return Err(BlockedStep { step, errors });
        }
    }
    // RoleSelection and BasicInfo passed, so both are set.
    let profile = draft
        .profile()
        .ok_or_else(|| single(Step::RoleSelection, FieldName::Role, FieldError::RoleNotSelected))?;
    let photo = draft.photo().ok_or_else(|| {
        single(
            Step::BasicInfo,
            FieldName::Photo,
            FieldError::required(FieldName::Photo),
        )
    })?;
    Ok(ValidatedDraft {
        draft,
        profile,
        photo,
    })
}

fn single(step: Step, field: FieldName, error: FieldError) -> BlockedStep {
    let mut errors = ValidationErrors::new();
    errors.insert(field, error);
    BlockedStep { step, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::complete_draft;
    use crate::field::FieldValue;

    #[test]
    fn complete_draft_passes_every_step_for_every_role() {
        for role in Role::ALL {
            let draft = complete_draft(role);
            let validated = validate_all(&draft).unwrap();
            assert_eq!(validated.role(), role);
        }
    }

    #[test]
    fn no_role_blocks_role_selection() {
        let draft = Draft::new();
        let outcome = validate_step(Step::RoleSelection, &draft);
        assert_eq!(
            outcome.errors().unwrap().get(FieldName::Role),
            Some(&FieldError::RoleNotSelected)
        );
    }

    #[test]
    fn doctor_without_email_is_blocked_at_basic_info() {
        let mut draft = complete_draft(Role::Doctor);
        draft.clear_fields(&[FieldName::Email]);

        let outcome = validate_step(Step::BasicInfo, &draft);

        let errors = outcome.errors().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FieldName::Email), Some(&FieldError::required(FieldName::Email)));
    }

    #[test]
    fn short_matching_password_is_blocked_by_length() {
        let mut draft = complete_draft(Role::Patient);
        draft.update(FieldName::Password, FieldValue::text("abc")).unwrap();
        draft
            .update(FieldName::ConfirmPassword, FieldValue::text("abc"))
            .unwrap();

        let outcome = validate_step(Step::RoleSpecificDetails, &draft);

        let errors = outcome.errors().unwrap();
        assert_eq!(
            errors.get(FieldName::Password),
            Some(&FieldError::PasswordTooShort { min_len: 6 })
        );
        assert!(!errors.contains(FieldName::ConfirmPassword));
    }

    #[test]
    fn mismatch_is_keyed_to_confirmation() {
        let mut draft = complete_draft(Role::Employer);
        draft
            .update(FieldName::ConfirmPassword, FieldValue::text("secret2"))
            .unwrap();
        let outcome = validate_step(Step::RoleSpecificDetails, &draft);
        assert_eq!(
            outcome.errors().unwrap().get(FieldName::ConfirmPassword),
            Some(&FieldError::PasswordMismatch)
        );
    }

    #[test]
    fn all_errors_of_a_step_are_collected() {
        let mut draft = Draft::new();
        draft.set_role(Role::Worker);
        draft.update(FieldName::Mobile, FieldValue::text("12345")).unwrap();
        draft.update(FieldName::PostalCode, FieldValue::text("abc")).unwrap();

        let outcome = validate_step(Step::BasicInfo, &draft);

        let errors = outcome.errors().unwrap();
        assert_eq!(errors.get(FieldName::Mobile), Some(&FieldError::InvalidMobile));
        assert_eq!(errors.get(FieldName::PostalCode), Some(&FieldError::InvalidPostalCode));
        assert!(errors.contains(FieldName::Name));
        assert!(errors.contains(FieldName::NationalId));
        assert!(errors.contains(FieldName::Photo));
    }

    #[test]
    fn optional_national_id_is_still_format_checked() {
        let mut draft = complete_draft(Role::Doctor);
        draft.update(FieldName::NationalId, FieldValue::text("12ab")).unwrap();
        let outcome = validate_step(Step::BasicInfo, &draft);
        assert_eq!(
            outcome.errors().unwrap().get(FieldName::NationalId),
            Some(&FieldError::InvalidNationalId)
        );
    }

    #[test]
    fn blank_optional_fields_are_not_format_checked() {
        let mut worker = complete_draft(Role::Worker);
        worker.update(FieldName::Email, FieldValue::text("   ")).unwrap();
        assert_eq!(validate_step(Step::BasicInfo, &worker), StepOutcome::Passed);

        let mut doctor = complete_draft(Role::Doctor);
        doctor.update(FieldName::NationalId, FieldValue::text(" \t ")).unwrap();
        assert_eq!(validate_step(Step::BasicInfo, &doctor), StepOutcome::Passed);
    }

    #[test]
    fn blank_required_email_is_reported_missing_not_malformed() {
        let mut draft = complete_draft(Role::Employer);
        draft.update(FieldName::Email, FieldValue::text("  ")).unwrap();

        let outcome = validate_step(Step::BasicInfo, &draft);

        assert_eq!(
            outcome.errors().unwrap().get(FieldName::Email),
            Some(&FieldError::required(FieldName::Email))
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let mut draft = complete_draft(Role::Worker);
        draft.clear_fields(&[FieldName::Weight]);
        let before = format!("{draft:?}");

        let first = validate_step(Step::HealthDetails, &draft);
        let second = validate_step(Step::HealthDetails, &draft);

        assert_eq!(first, second);
        assert_eq!(format!("{draft:?}"), before);
    }

    #[test]
    fn validate_all_reports_first_failing_step() {
        let mut draft = complete_draft(Role::Worker);
        draft.clear_fields(&[FieldName::Height, FieldName::EmployerName]);
        let blocked = validate_all(&draft).unwrap_err();
        assert_eq!(blocked.step, Step::HealthDetails);
        assert!(blocked.errors.contains(FieldName::Height));
    }

    #[test]
    fn errors_serialize_by_wire_name() {
        let mut errors = ValidationErrors::new();
        errors.insert(FieldName::PostalCode, FieldError::InvalidPostalCode);
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({ "postalCode": "Postal code must be exactly 6 digits" })
        );
    }
}
