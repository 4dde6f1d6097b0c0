//! Registration wizard domain.
//!
//! Roles, steps and fields; the draft record; the field schema registry and
//! step validator; the wizard state machine; photo preview lifecycle; the
//! submission payload; and the ports adapters implement.

pub mod catalog;
pub mod config;
pub mod draft;
pub mod field;
pub mod photo;
pub mod ports;
pub mod review;
pub mod role;
pub mod schema;
pub mod security;
pub mod step;
pub mod submission;
pub mod validation;
pub mod wizard;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::AppConfig;
pub use draft::{Draft, DraftError, RoleSwitch};
pub use field::{FieldKind, FieldName, FieldValue};
pub use photo::{MimeType, PhotoFile, PhotoHandler, PhotoRejected, PhotoSource, PreviewLease};
pub use review::ReviewSummary;
pub use role::Role;
pub use security::SecretString;
pub use step::Step;
pub use submission::{PhotoTransport, RegistrationRequest, SubmissionOutcome};
pub use validation::{FieldError, StepOutcome, ValidatedDraft, ValidationErrors};
pub use wizard::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
