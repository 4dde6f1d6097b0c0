use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use super::MimeType;
use crate::ports::PreviewStorePort;

/// Handle of a live preview, e.g. the URL a front end renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PreviewId(String);

impl PreviewId {
    pub fn new() -> Self {
        Self(format!("preview:{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PreviewId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PreviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PreviewId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Displayable rendition of the selected photo.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub bytes: Bytes,
    pub mime_type: MimeType,
    pub width: u32,
    pub height: u32,
}

impl fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewImage")
            .field("mime_type", &self.mime_type)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

/// A preview registered with the store, released when the lease is dropped.
///
/// 预览资源租约：Drop 时释放，不存在未释放的路径。
pub struct PreviewLease {
    id: PreviewId,
    width: u32,
    height: u32,
    store: Arc<dyn PreviewStorePort>,
}

impl PreviewLease {
    pub(crate) fn acquire(store: Arc<dyn PreviewStorePort>, image: PreviewImage) -> Self {
        let (width, height) = (image.width, image.height);
        let id = store.acquire(image);
        #[cfg(feature = "tracing")]
        tracing::debug!(preview_id = %id, "photo preview acquired");
        Self {
            id,
            width,
            height,
            store,
        }
    }

    pub fn id(&self) -> &PreviewId {
        &self.id
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Debug for PreviewLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewLease")
            .field("id", &self.id)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Drop for PreviewLease {
    fn drop(&mut self) {
        self.store.release(&self.id);
        #[cfg(feature = "tracing")]
        tracing::debug!(preview_id = %self.id, "photo preview released");
    }
}
