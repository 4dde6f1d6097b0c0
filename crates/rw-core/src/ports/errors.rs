use thiserror::Error;

/// Failure talking to the registration endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationTransportError {
    /// Non-2xx response. `message` is the server's text, shown to the user unmodified.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("The registration service did not respond in time")]
    Timeout,

    #[error("Unable to reach the registration service: {0}")]
    Network(String),

    #[error("Could not encode the registration request: {0}")]
    Encoding(String),
}
