//! Submission serializer: wire payload and response interpretation.
//!
//! 提交序列化：把已校验草稿转换为注册请求，并解释响应。

mod outcome;
mod payload;

pub use outcome::{SubmissionOutcome, SIGN_IN_ROUTE};
pub use payload::{RegistrationPayload, RegistrationRequest};

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// How the photo travels with the registration call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhotoTransport {
    /// One `multipart/form-data` request: `registration` JSON part plus `photo` part.
    #[default]
    Multipart,
    /// JSON body only. The photo is not transmitted.
    JsonOnly,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown photo transport: {0} (expected \"multipart\" or \"json-only\")")]
pub struct UnknownPhotoTransport(pub String);

impl PhotoTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoTransport::Multipart => "multipart",
            PhotoTransport::JsonOnly => "json-only",
        }
    }
}

impl fmt::Display for PhotoTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhotoTransport {
    type Err = UnknownPhotoTransport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multipart" => Ok(PhotoTransport::Multipart),
            "json-only" => Ok(PhotoTransport::JsonOnly),
            other => Err(UnknownPhotoTransport(other.to_string())),
        }
    }
}
