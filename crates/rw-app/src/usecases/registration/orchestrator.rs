//! Registration wizard orchestrator.
//!
//! Owns one draft and one photo handler for the lifetime of a wizard session,
//! feeds user intents through the pure wizard state machine, and executes the
//! resulting actions. Dropping the wizard releases the photo preview.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, info_span, warn, Instrument};

use rw_core::photo::PreviewId;
use rw_core::ports::{
    PreviewRendererPort, PreviewStorePort, RegistrationGatewayPort, SignInRoutePort,
    WizardEventPort,
};
use rw_core::{
    Draft, DraftError, FieldName, FieldValue, PhotoRejected, PhotoHandler, PhotoSource,
    ReviewSummary, Role, RoleSwitch, Step, SubmissionOutcome, ValidationErrors, WizardAction,
    WizardEvent, WizardState, WizardStateMachine,
};

use super::SubmitRegistration;

/// Errors produced by the registration wizard.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error(transparent)]
    Draft(#[from] DraftError),
    #[error(transparent)]
    Photo(#[from] PhotoRejected),
    #[error("a registration request is already in flight")]
    SubmissionInProgress,
    #[error("registration already completed")]
    Completed,
}

/// Ports the wizard depends on.
pub struct RegistrationWizardDeps {
    pub gateway: Arc<dyn RegistrationGatewayPort>,
    pub preview_renderer: Arc<dyn PreviewRendererPort>,
    pub preview_store: Arc<dyn PreviewStorePort>,
    pub events: Arc<dyn WizardEventPort>,
    pub sign_in: Arc<dyn SignInRoutePort>,
}

/// Result of pressing submit on the review step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The request was sent; the outcome is what the user sees.
    Submitted(SubmissionOutcome),
    /// Re-validation failed; the wizard moved back to `step`.
    Blocked {
        step: Step,
        errors: ValidationErrors,
    },
    /// Another submit is still waiting for its response.
    AlreadySubmitting,
    /// The wizard left the review step before submit was pressed.
    NotOnReview { step: Step },
}

struct WizardSession {
    state: WizardState,
    draft: Draft,
    photo: PhotoHandler,
}

/// Orchestrator that drives wizard state and side effects.
pub struct RegistrationWizard {
    session: Mutex<WizardSession>,
    submit_registration: SubmitRegistration,
    events: Arc<dyn WizardEventPort>,
    sign_in: Arc<dyn SignInRoutePort>,
}

impl RegistrationWizard {
    pub fn new(deps: RegistrationWizardDeps) -> Self {
        Self {
            session: Mutex::new(WizardSession {
                state: WizardState::default(),
                draft: Draft::new(),
                photo: PhotoHandler::new(deps.preview_renderer, deps.preview_store),
            }),
            submit_registration: SubmitRegistration::new(deps.gateway),
            events: deps.events,
            sign_in: deps.sign_in,
        }
    }

    pub async fn state(&self) -> WizardState {
        self.session.lock().await.state.clone()
    }

    /// Read the draft without changing it.
    pub async fn inspect<R>(&self, f: impl FnOnce(&Draft) -> R) -> R {
        f(&self.session.lock().await.draft)
    }

    pub async fn preview(&self) -> Option<PreviewId> {
        let session = self.session.lock().await;
        session.photo.preview().map(|lease| lease.id().clone())
    }

    pub async fn summary(&self) -> ReviewSummary {
        ReviewSummary::build(&self.session.lock().await.draft)
    }

    /// Activate a role. A different role resets the previous role's fields.
    pub async fn select_role(&self, role: Role) -> Result<WizardState, WizardError> {
        let state = {
            let mut session = self.session.lock().await;
            ensure_editable(&session.state)?;
            if let RoleSwitch::Reset { previous } = session.draft.set_role(role) {
                info!(?previous, %role, "registration role selected");
            }
            session.state.clear_field_error(FieldName::Role);
            session.state.clone()
        };
        self.events.emit_state_changed(&state).await;
        Ok(state)
    }

    /// Merge one field value into the draft and clear that field's error.
    pub async fn update_field(
        &self,
        field: FieldName,
        value: FieldValue,
    ) -> Result<WizardState, WizardError> {
        let state = {
            let mut session = self.session.lock().await;
            ensure_editable(&session.state)?;
            session.draft.update(field, value)?;
            session.state.clear_field_error(field);
            session.state.clone()
        };
        self.events.emit_state_changed(&state).await;
        Ok(state)
    }

    /// Select a profile photo from the picker or a drop.
    pub async fn select_photo(&self, source: PhotoSource) -> Result<PreviewId, WizardError> {
        let (preview, state) = {
            let mut session = self.session.lock().await;
            ensure_editable(&session.state)?;
            let WizardSession { draft, photo, .. } = &mut *session;
            let preview = match photo.select(source, draft) {
                Ok(lease) => lease.id().clone(),
                Err(err) => {
                    warn!(error = %err, "photo selection rejected");
                    return Err(err.into());
                }
            };
            session.state.clear_field_error(FieldName::Photo);
            (preview, session.state.clone())
        };
        self.events.emit_state_changed(&state).await;
        Ok(preview)
    }

    pub async fn next(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Next).await.map(|d| d.state)
    }

    pub async fn previous(&self) -> Result<WizardState, WizardError> {
        self.dispatch(WizardEvent::Previous).await.map(|d| d.state)
    }

    /// The review step, when it is on screen. Submitting is only possible through it.
    pub async fn review(&self) -> Option<ReviewStep<'_>> {
        let session = self.session.lock().await;
        session.state.is_review().then(|| ReviewStep {
            wizard: self,
            summary: ReviewSummary::build(&session.draft),
        })
    }

    async fn dispatch(&self, event: WizardEvent) -> Result<Dispatched, WizardError> {
        let span = info_span!("usecase.registration_wizard.dispatch", event = ?event);
        async {
            let mut pending_events = vec![event];
            let mut outcome = None;
            let mut current = None;

            while let Some(event) = pending_events.pop() {
                let (next, actions) = {
                    let mut session = self.session.lock().await;
                    if session.state == WizardState::Completed {
                        return Err(WizardError::Completed);
                    }
                    let from = session.state.clone();
                    let event_name = format!("{:?}", event);
                    let (next, actions) =
                        WizardStateMachine::transition(from.clone(), event, &session.draft);
                    info!(from = ?from, to = ?next, event = %event_name, "wizard state transition");
                    session.state = next.clone();
                    (next, actions)
                };
                self.events.emit_state_changed(&next).await;

                let follow_up = self.execute_actions(actions).await;
                if let Some((event, submitted)) = follow_up {
                    pending_events.push(event);
                    outcome = Some(submitted);
                }
                current = Some(next);
            }

            Ok(Dispatched {
                state: current.unwrap_or_default(),
                outcome,
            })
        }
        .instrument(span)
        .await
    }

    /// Run side effects. Returns the follow-up event of a sent registration.
    async fn execute_actions(
        &self,
        actions: Vec<WizardAction>,
    ) -> Option<(WizardEvent, SubmissionOutcome)> {
        let mut follow_up = None;
        for action in actions {
            debug!(?action, "wizard executing action");
            match action {
                WizardAction::SendRegistration(request) => {
                    let outcome = self.submit_registration.execute(&request).await;
                    let event = match &outcome {
                        SubmissionOutcome::SuccessWithRedirect { .. } => {
                            WizardEvent::SubmissionSucceeded
                        }
                        SubmissionOutcome::FailureWithMessage { message } => {
                            WizardEvent::SubmissionFailed {
                                message: message.clone(),
                            }
                        }
                    };
                    follow_up = Some((event, outcome));
                }
                WizardAction::DiscardDraft => {
                    let mut session = self.session.lock().await;
                    session.photo.release();
                    session.draft.reset();
                }
                WizardAction::RouteToSignIn => {
                    self.sign_in.route_to_sign_in().await;
                }
            }
        }
        follow_up
    }
}

struct Dispatched {
    state: WizardState,
    outcome: Option<SubmissionOutcome>,
}

fn ensure_editable(state: &WizardState) -> Result<(), WizardError> {
    match state {
        WizardState::Submitting => Err(WizardError::SubmissionInProgress),
        WizardState::Completed => Err(WizardError::Completed),
        WizardState::Editing { .. } | WizardState::SubmissionFailed { .. } => Ok(()),
    }
}

/// Handle to the review step, the only place submission can start from.
pub struct ReviewStep<'a> {
    wizard: &'a RegistrationWizard,
    summary: ReviewSummary,
}

impl<'a> ReviewStep<'a> {
    pub fn summary(&self) -> &ReviewSummary {
        &self.summary
    }

    /// Re-validate every step and, if the draft is complete, send it.
    pub async fn submit(self) -> Result<SubmitResult, WizardError> {
        let dispatched = self.wizard.dispatch(WizardEvent::Submit).await?;
        Ok(match (dispatched.outcome, dispatched.state) {
            (Some(outcome), _) => SubmitResult::Submitted(outcome),
            (None, WizardState::Editing { step, errors }) if !errors.is_empty() => {
                SubmitResult::Blocked { step, errors }
            }
            (None, WizardState::Submitting) => SubmitResult::AlreadySubmitting,
            (None, WizardState::Completed) => return Err(WizardError::Completed),
            // The handle outlived the review screen; nothing was sent.
            (None, state) => SubmitResult::NotOnReview { step: state.step() },
        })
    }
}
