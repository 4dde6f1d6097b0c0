use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use rw_core::ports::RegistrationGatewayPort;
use rw_core::{RegistrationRequest, SubmissionOutcome};

/// Use case for sending one registration attempt.
///
/// Never retries; a failure is reported to the user, who decides whether to submit again.
pub struct SubmitRegistration {
    gateway: Arc<dyn RegistrationGatewayPort>,
}

impl SubmitRegistration {
    pub fn new(gateway: Arc<dyn RegistrationGatewayPort>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, request: &RegistrationRequest) -> SubmissionOutcome {
        let span = info_span!("usecase.submit_registration.execute", role = %request.role());
        async {
            let result = self.gateway.register(request).await;
            match &result {
                Ok(receipt) => info!(status = receipt.status, "registration accepted"),
                Err(err) => warn!(error = %err, "registration failed"),
            }
            SubmissionOutcome::from_result(result)
        }
        .instrument(span)
        .await
    }
}
