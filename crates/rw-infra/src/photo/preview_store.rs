use std::collections::HashMap;
use std::sync::Mutex;

use rw_core::photo::{PreviewId, PreviewImage};
use rw_core::ports::PreviewStorePort;
use tracing::{debug, warn};

/// Keeps live previews in memory until their lease releases them.
#[derive(Default)]
pub struct InMemoryPreviewStore {
    previews: Mutex<HashMap<PreviewId, PreviewImage>>,
}

impl InMemoryPreviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.previews.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn get(&self, id: &PreviewId) -> Option<PreviewImage> {
        self.previews.lock().ok()?.get(id).cloned()
    }
}

impl PreviewStorePort for InMemoryPreviewStore {
    fn acquire(&self, image: PreviewImage) -> PreviewId {
        let id = PreviewId::new();
        match self.previews.lock() {
            Ok(mut previews) => {
                previews.insert(id.clone(), image);
                debug!(preview_id = %id, live = previews.len(), "preview stored");
            }
            Err(_) => warn!(preview_id = %id, "preview store poisoned; preview not kept"),
        }
        id
    }

    fn release(&self, id: &PreviewId) {
        if let Ok(mut previews) = self.previews.lock() {
            if previews.remove(id).is_none() {
                warn!(preview_id = %id, "release of unknown preview");
            }
        }
    }
}
