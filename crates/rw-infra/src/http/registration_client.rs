//! HTTP adapter for the registration endpoint.
//!
//! One POST per attempt, no authentication header. With the multipart
//! transport the body carries a `registration` JSON part and a `photo` part;
//! with json-only it is the JSON document alone.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

use rw_core::ports::{RegistrationGatewayPort, RegistrationReceipt, RegistrationTransportError};
use rw_core::{PhotoTransport, RegistrationRequest};

use crate::config::RegistrationClientConfig;

pub struct HttpRegistrationGateway {
    client: reqwest::Client,
    endpoint: String,
    transport: PhotoTransport,
}

impl HttpRegistrationGateway {
    pub fn new(config: &RegistrationClientConfig) -> Result<Self, RegistrationTransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                RegistrationTransportError::Network(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url(),
            transport: config.photo_transport,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_body(
        &self,
        request: &RegistrationRequest,
    ) -> Result<reqwest::RequestBuilder, RegistrationTransportError> {
        let json = request
            .payload_json()
            .map_err(|e| RegistrationTransportError::Encoding(e.to_string()))?;
        let builder = self.client.post(&self.endpoint);

        match self.transport {
            PhotoTransport::Multipart => {
                let registration = Part::bytes(json)
                    .mime_str("application/json")
                    .map_err(|e| RegistrationTransportError::Encoding(e.to_string()))?;
                let photo = Part::bytes(request.photo.bytes.to_vec())
                    .file_name(request.photo.file_name.clone())
                    .mime_str(request.photo.mime_type.as_str())
                    .map_err(|e| RegistrationTransportError::Encoding(e.to_string()))?;
                let form = Form::new()
                    .part("registration", registration)
                    .part("photo", photo);
                Ok(builder.multipart(form))
            }
            PhotoTransport::JsonOnly => {
                warn!(
                    file_name = %request.photo.file_name,
                    "json-only transport: the profile photo is not sent"
                );
                Ok(builder.header(CONTENT_TYPE, "application/json").body(json))
            }
        }
    }
}

#[async_trait]
impl RegistrationGatewayPort for HttpRegistrationGateway {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrationTransportError> {
        let builder = self.build_body(request)?;
        debug!(endpoint = %self.endpoint, transport = %self.transport, "sending registration");

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(RegistrationReceipt {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(RegistrationTransportError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body, status),
        })
    }
}

fn transport_error(error: reqwest::Error) -> RegistrationTransportError {
    if error.is_timeout() {
        RegistrationTransportError::Timeout
    } else {
        RegistrationTransportError::Network(error.to_string())
    }
}

/// The server's `message` (or `error`) field; short plain-text bodies are used as-is.
fn rejection_message(body: &str, status: reqwest::StatusCode) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    } else {
        let text = body.trim();
        if !text.is_empty() && text.len() <= 200 && !text.starts_with('<') {
            return text.to_string();
        }
    }
    format!("Registration failed (HTTP {})", status.as_u16())
}
