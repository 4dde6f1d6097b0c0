use std::time::Duration;

use rw_core::submission::UnknownPhotoTransport;
use rw_core::{AppConfig, PhotoTransport};

/// Settings of the HTTP registration gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationClientConfig {
    pub base_url: String,
    pub endpoint_path: String,
    pub timeout: Duration,
    pub photo_transport: PhotoTransport,
}

impl RegistrationClientConfig {
    /// v1 默认值
    pub fn defaults() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            endpoint_path: "/api/auth/register".to_string(),
            timeout: Duration::from_secs(30),
            photo_transport: PhotoTransport::Multipart,
        }
    }

    /// Apply configured values over the defaults. Empty or zero values keep the default.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, UnknownPhotoTransport> {
        let defaults = Self::defaults();
        Ok(Self {
            base_url: non_empty(&config.base_url).unwrap_or(defaults.base_url),
            endpoint_path: non_empty(&config.endpoint_path).unwrap_or(defaults.endpoint_path),
            timeout: match config.timeout_secs {
                0 => defaults.timeout,
                secs => Duration::from_secs(secs),
            },
            photo_transport: match config.photo_transport.trim() {
                "" => defaults.photo_transport,
                name => name.parse()?,
            },
        })
    }

    /// Absolute URL of the registration endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.endpoint_path.trim_start_matches('/')
        )
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Photo preview settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Longest edge of a preview, in pixels.
    pub max_edge: u32,
}

impl PreviewConfig {
    pub fn defaults() -> Self {
        Self { max_edge: 256 }
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        match config.preview_max_edge {
            0 => Self::defaults(),
            max_edge => Self { max_edge },
        }
    }
}
