use bytes::Bytes;
use std::fmt;

use super::MimeType;

/// A file handed over by the picker or a drop surface. The bytes are opaque here.
#[derive(Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub mime_type: MimeType,
    pub bytes: Bytes,
}

impl PhotoFile {
    pub fn new(file_name: impl Into<String>, mime_type: MimeType, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type,
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for PhotoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PhotoFile")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

/// Input surface a photo arrived from. Both feed the same selection path.
#[derive(Debug, Clone)]
pub enum PhotoSource {
    Picker(PhotoFile),
    /// Files carried by a drop event; the first one is used.
    Dropped(Vec<PhotoFile>),
}

impl PhotoSource {
    pub(crate) fn into_file(self) -> Option<PhotoFile> {
        match self {
            PhotoSource::Picker(file) => Some(file),
            PhotoSource::Dropped(files) => files.into_iter().next(),
        }
    }
}
