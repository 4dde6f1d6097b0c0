//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard use cases and the adapters
//! that render previews, talk to the registration endpoint, and drive the
//! front end. The core never depends on an implementation.

pub mod errors;
mod navigation;
mod preview;
mod registration_gateway;
mod wizard_event;

pub use errors::RegistrationTransportError;
pub use navigation::SignInRoutePort;
pub use preview::{PreviewRendererPort, PreviewStorePort};
pub use registration_gateway::{RegistrationGatewayPort, RegistrationReceipt};
pub use wizard_event::WizardEventPort;

#[cfg(test)]
pub use preview::{MockPreviewRenderer, MockPreviewStore};
#[cfg(any(test, feature = "test-support"))]
pub use registration_gateway::MockRegistrationGateway;
