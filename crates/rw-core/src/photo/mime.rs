use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MimeType(pub String);

impl MimeType {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn octet_stream() -> Self {
        Self("application/octet-stream".into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the top-level type is `image`, e.g. `image/png`.
    pub fn is_image(&self) -> bool {
        self.0
            .split('/')
            .next()
            .is_some_and(|top| top.trim().eq_ignore_ascii_case("image"))
            && self.0.contains('/')
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
