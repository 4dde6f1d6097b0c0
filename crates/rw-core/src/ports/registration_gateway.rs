use async_trait::async_trait;

use super::RegistrationTransportError;
use crate::submission::RegistrationRequest;

/// Successful response from the registration endpoint. The body is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationReceipt {
    pub status: u16,
}

#[async_trait]
pub trait RegistrationGatewayPort: Send + Sync {
    /// Send one registration attempt. Never retried by the caller.
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrationTransportError>;
}

#[cfg(any(test, feature = "test-support"))]
mockall::mock! {
    pub RegistrationGateway {}

    #[async_trait]
    impl RegistrationGatewayPort for RegistrationGateway {
        async fn register(
            &self,
            request: &RegistrationRequest,
        ) -> Result<RegistrationReceipt, RegistrationTransportError>;
    }
}
