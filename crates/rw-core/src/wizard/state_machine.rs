//! Wizard state machine.
//!
//! Pure transition function over the wizard steps and the submission phase.
//! The draft is read for validation only; every change to it happens through
//! the actions returned here.

use serde::Serialize;

use crate::draft::Draft;
use crate::submission::RegistrationRequest;
use crate::validation::{validate_all, validate_step, StepOutcome, ValidationErrors};
use crate::{FieldName, Step};

/// Wizard state.
///
/// 向导状态。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum WizardState {
    /// A step is displayed with the errors of its last `Next`.
    ///
    /// 正在编辑某一步骤。
    Editing {
        step: Step,
        errors: ValidationErrors,
    },
    /// Registration request in flight; further submits are ignored.
    ///
    /// 提交中。
    Submitting,
    /// The last attempt failed; the review step is shown with `message`.
    ///
    /// 提交失败，停留在确认页。
    SubmissionFailed { message: String },
    /// Registered. The draft is gone.
    ///
    /// 注册完成。
    Completed,
}

impl Default for WizardState {
    fn default() -> Self {
        WizardState::editing(Step::FIRST)
    }
}

impl WizardState {
    pub fn editing(step: Step) -> Self {
        WizardState::Editing {
            step,
            errors: ValidationErrors::new(),
        }
    }

    /// The step on screen. Submission phases are shown on Review.
    pub fn step(&self) -> Step {
        match self {
            WizardState::Editing { step, .. } => *step,
            WizardState::Submitting
            | WizardState::SubmissionFailed { .. }
            | WizardState::Completed => Step::Review,
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match self {
            WizardState::Editing { errors, .. } if !errors.is_empty() => Some(errors),
            _ => None,
        }
    }

    /// Forget the error of a field the user just changed.
    pub fn clear_field_error(&mut self, field: FieldName) {
        if let WizardState::Editing { errors, .. } = self {
            errors.clear(field);
        }
    }

    pub fn is_review(&self) -> bool {
        matches!(
            self,
            WizardState::Editing {
                step: Step::Review,
                ..
            } | WizardState::SubmissionFailed { .. }
        )
    }
}

/// Events that drive the wizard.
///
/// 驱动向导的事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    Next,
    Previous,
    Submit,
    SubmissionSucceeded,
    SubmissionFailed { message: String },
}

/// Side-effects produced by transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug)]
pub enum WizardAction {
    SendRegistration(RegistrationRequest),
    DiscardDraft,
    RouteToSignIn,
}

/// Pure wizard state machine.
///
/// 纯状态机：不包含副作用。
pub struct WizardStateMachine;

impl WizardStateMachine {
    pub fn transition(
        state: WizardState,
        event: WizardEvent,
        draft: &Draft,
    ) -> (WizardState, Vec<WizardAction>) {
        match (state, event) {
            (WizardState::Editing { step, .. }, WizardEvent::Next) => {
                match (validate_step(step, draft), step.next()) {
                    (StepOutcome::Blocked { errors }, _) => {
                        (WizardState::Editing { step, errors }, Vec::new())
                    }
                    (StepOutcome::Passed, Some(next)) => (WizardState::editing(next), Vec::new()),
                    // Review is the last step; submitting is a separate event.
                    (StepOutcome::Passed, None) => (WizardState::editing(step), Vec::new()),
                }
            }
            (WizardState::Editing { step, errors }, WizardEvent::Previous) => match step.previous() {
                Some(previous) => (WizardState::editing(previous), Vec::new()),
                None => (WizardState::Editing { step, errors }, Vec::new()),
            },
            (WizardState::SubmissionFailed { .. }, WizardEvent::Previous) => (
                WizardState::editing(Step::RoleSpecificDetails),
                Vec::new(),
            ),
            (
                WizardState::Editing {
                    step: Step::Review, ..
                }
                | WizardState::SubmissionFailed { .. },
                WizardEvent::Submit,
            ) => match validate_all(draft) {
                Ok(validated) => (
                    WizardState::Submitting,
                    vec![WizardAction::SendRegistration(
                        RegistrationRequest::from_validated(validated),
                    )],
                ),
                Err(blocked) => (
                    WizardState::Editing {
                        step: blocked.step,
                        errors: blocked.errors,
                    },
                    Vec::new(),
                ),
            },
            (WizardState::Submitting, WizardEvent::SubmissionSucceeded) => (
                WizardState::Completed,
                vec![WizardAction::DiscardDraft, WizardAction::RouteToSignIn],
            ),
            (WizardState::Submitting, WizardEvent::SubmissionFailed { message }) => {
                (WizardState::SubmissionFailed { message }, Vec::new())
            }
            (state, _event) => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;
    use crate::test_support::complete_draft;
    use crate::validation::FieldError;
    use crate::Role;

    fn at(step: Step) -> WizardState {
        WizardState::editing(step)
    }

    #[test]
    fn next_advances_when_step_passes() {
        let draft = complete_draft(Role::Worker);
        for pair in Step::ALL.windows(2) {
            let (next, actions) = WizardStateMachine::transition(at(pair[0]), WizardEvent::Next, &draft);
            assert_eq!(next, at(pair[1]));
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn next_blocks_with_errors_and_keeps_step() {
        let mut draft = Draft::new();
        draft.set_role(Role::Doctor);

        let (next, _) = WizardStateMachine::transition(at(Step::BasicInfo), WizardEvent::Next, &draft);

        assert_eq!(next.step(), Step::BasicInfo);
        let errors = next.errors().unwrap();
        assert_eq!(errors.get(FieldName::Email), Some(&FieldError::required(FieldName::Email)));
    }

    #[test]
    fn next_on_review_stays_on_review() {
        let draft = complete_draft(Role::Patient);
        let (next, actions) = WizardStateMachine::transition(at(Step::Review), WizardEvent::Next, &draft);
        assert_eq!(next, at(Step::Review));
        assert!(actions.is_empty());
    }

    #[test]
    fn previous_never_validates() {
        let draft = Draft::new();
        for pair in Step::ALL.windows(2) {
            let (prev, actions) =
                WizardStateMachine::transition(at(pair[1]), WizardEvent::Previous, &draft);
            assert_eq!(prev, at(pair[0]));
            assert!(actions.is_empty());
        }
        let (first, _) =
            WizardStateMachine::transition(at(Step::RoleSelection), WizardEvent::Previous, &draft);
        assert_eq!(first, at(Step::RoleSelection));
    }

    #[test]
    fn submit_from_review_sends_registration() {
        let draft = complete_draft(Role::Worker);
        let (next, actions) = WizardStateMachine::transition(at(Step::Review), WizardEvent::Submit, &draft);
        assert_eq!(next, WizardState::Submitting);
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], WizardAction::SendRegistration(req) if req.role() == Role::Worker));
    }

    #[test]
    fn submit_revalidates_and_returns_to_first_failing_step() {
        let mut draft = complete_draft(Role::Worker);
        draft
            .update(FieldName::Mobile, FieldValue::text("12"))
            .unwrap();

        let (next, actions) = WizardStateMachine::transition(at(Step::Review), WizardEvent::Submit, &draft);

        assert!(actions.is_empty());
        assert_eq!(next.step(), Step::BasicInfo);
        assert_eq!(
            next.errors().unwrap().get(FieldName::Mobile),
            Some(&FieldError::InvalidMobile)
        );
    }

    #[test]
    fn submit_outside_review_is_ignored() {
        let draft = complete_draft(Role::Worker);
        let (next, actions) =
            WizardStateMachine::transition(at(Step::HealthDetails), WizardEvent::Submit, &draft);
        assert_eq!(next, at(Step::HealthDetails));
        assert!(actions.is_empty());
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let draft = complete_draft(Role::Worker);
        let (next, actions) =
            WizardStateMachine::transition(WizardState::Submitting, WizardEvent::Submit, &draft);
        assert_eq!(next, WizardState::Submitting);
        assert!(actions.is_empty());
    }

    #[test]
    fn success_discards_draft_and_routes_to_sign_in() {
        let draft = complete_draft(Role::Worker);
        let (next, actions) = WizardStateMachine::transition(
            WizardState::Submitting,
            WizardEvent::SubmissionSucceeded,
            &draft,
        );
        assert_eq!(next, WizardState::Completed);
        assert!(matches!(
            actions.as_slice(),
            [WizardAction::DiscardDraft, WizardAction::RouteToSignIn]
        ));
    }

    #[test]
    fn failure_keeps_review_and_allows_retry() {
        let draft = complete_draft(Role::Employer);
        let (failed, actions) = WizardStateMachine::transition(
            WizardState::Submitting,
            WizardEvent::SubmissionFailed {
                message: "Email already registered".into(),
            },
            &draft,
        );
        assert!(actions.is_empty());
        assert!(failed.is_review());

        let (retry, actions) = WizardStateMachine::transition(failed, WizardEvent::Submit, &draft);
        assert_eq!(retry, WizardState::Submitting);
        assert_eq!(actions.len(), 1);
    }

    #[test]
    fn completed_ignores_everything() {
        let draft = Draft::new();
        for event in [WizardEvent::Next, WizardEvent::Previous, WizardEvent::Submit] {
            let (next, actions) =
                WizardStateMachine::transition(WizardState::Completed, event, &draft);
            assert_eq!(next, WizardState::Completed);
            assert!(actions.is_empty());
        }
    }

    #[test]
    fn clear_field_error_only_touches_that_field() {
        let mut draft = Draft::new();
        draft.set_role(Role::Worker);
        let (mut state, _) =
            WizardStateMachine::transition(at(Step::BasicInfo), WizardEvent::Next, &draft);
        state.clear_field_error(FieldName::Name);
        let errors = state.errors().unwrap();
        assert!(!errors.contains(FieldName::Name));
        assert!(errors.contains(FieldName::Mobile));
    }
}
