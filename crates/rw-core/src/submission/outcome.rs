use serde::Serialize;

use crate::ports::{RegistrationReceipt, RegistrationTransportError};

/// Where a registered user is sent next.
pub const SIGN_IN_ROUTE: &str = "/login";

/// What the user sees after a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmissionOutcome {
    SuccessWithRedirect { location: String },
    /// `message` is shown as-is; for a server rejection it is the server's own text.
    FailureWithMessage { message: String },
}

impl SubmissionOutcome {
    pub fn from_result(result: Result<RegistrationReceipt, RegistrationTransportError>) -> Self {
        match result {
            Ok(_) => SubmissionOutcome::SuccessWithRedirect {
                location: SIGN_IN_ROUTE.to_string(),
            },
            Err(err) => SubmissionOutcome::FailureWithMessage {
                message: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::SuccessWithRedirect { .. })
    }
}
