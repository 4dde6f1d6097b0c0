mod registration_client_config;

pub use registration_client_config::{PreviewConfig, RegistrationClientConfig};
