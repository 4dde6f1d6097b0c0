use std::sync::Arc;
use thiserror::Error;

use super::{MimeType, PhotoSource, PreviewLease};
use crate::draft::Draft;
use crate::ports::{PreviewRendererPort, PreviewStorePort};

/// Why a photo selection was refused. The draft's photo is untouched in every case.
#[derive(Debug, Error)]
pub enum PhotoRejected {
    #[error("Please choose an image file (got {mime_type})")]
    NotAnImage { mime_type: MimeType },

    #[error("The dropped item did not contain a file")]
    NoFileInDrop,

    #[error("Could not read the image: {0}")]
    PreviewFailed(#[source] anyhow::Error),
}

/// Accepts photo selections and owns the single live preview.
///
/// The old lease is dropped before a new one is acquired, so two previews are
/// never alive at once. Dropping the handler releases the current preview.
pub struct PhotoHandler {
    renderer: Arc<dyn PreviewRendererPort>,
    store: Arc<dyn PreviewStorePort>,
    current: Option<PreviewLease>,
}

impl PhotoHandler {
    pub fn new(renderer: Arc<dyn PreviewRendererPort>, store: Arc<dyn PreviewStorePort>) -> Self {
        Self {
            renderer,
            store,
            current: None,
        }
    }

    /// Validate the selected file, swap the preview and store the file in the draft.
    pub fn select(
        &mut self,
        source: PhotoSource,
        draft: &mut Draft,
    ) -> Result<&PreviewLease, PhotoRejected> {
        let file = source.into_file().ok_or(PhotoRejected::NoFileInDrop)?;
        if !file.mime_type.is_image() {
            #[cfg(feature = "tracing")]
            tracing::info!(file_name = %file.file_name, mime_type = %file.mime_type, "photo rejected: not an image");
            return Err(PhotoRejected::NotAnImage {
                mime_type: file.mime_type,
            });
        }

        // Rendering holds no resource, so a failure here leaves the old preview alive.
        let image = self
            .renderer
            .render(&file)
            .map_err(PhotoRejected::PreviewFailed)?;

        self.release();
        let lease = PreviewLease::acquire(self.store.clone(), image);
        draft.set_photo(file);
        Ok(self.current.insert(lease))
    }

    pub fn preview(&self) -> Option<&PreviewLease> {
        self.current.as_ref()
    }

    /// Release the live preview, if any.
    pub fn release(&mut self) {
        drop(self.current.take());
    }
}
