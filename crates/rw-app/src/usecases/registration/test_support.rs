//! Hand-rolled ports shared by the registration use case tests.
//!
//! Draft fixtures and the gateway mock come from rw-core's `test-support` feature.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rw_core::photo::{PreviewId, PreviewImage};
use rw_core::ports::{PreviewRendererPort, PreviewStorePort, SignInRoutePort, WizardEventPort};
use rw_core::test_support::complete_values;
use rw_core::{PhotoFile, PhotoSource, Role, WizardState};

pub use rw_core::ports::MockRegistrationGateway;
pub use rw_core::test_support::{complete_request, png};

use super::RegistrationWizard;

pub struct StaticRenderer;

impl PreviewRendererPort for StaticRenderer {
    fn render(&self, file: &PhotoFile) -> anyhow::Result<PreviewImage> {
        Ok(PreviewImage {
            bytes: file.bytes.clone(),
            mime_type: file.mime_type.clone(),
            width: 8,
            height: 8,
        })
    }
}

#[derive(Default)]
pub struct CountingStore {
    pub live: AtomicUsize,
    pub max_live: AtomicUsize,
}

impl PreviewStorePort for CountingStore {
    fn acquire(&self, _image: PreviewImage) -> PreviewId {
        let live = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_live.fetch_max(live, Ordering::SeqCst);
        PreviewId::new()
    }

    fn release(&self, _id: &PreviewId) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
pub struct RecordingEvents {
    states: Mutex<Vec<WizardState>>,
}

impl RecordingEvents {
    pub fn states(&self) -> Vec<WizardState> {
        self.states.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WizardEventPort for RecordingEvents {
    async fn emit_state_changed(&self, state: &WizardState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

#[derive(Default)]
pub struct RecordingSignIn {
    pub calls: AtomicUsize,
}

#[async_trait::async_trait]
impl SignInRoutePort for RecordingSignIn {
    async fn route_to_sign_in(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// Select `role` and fill every field it requires, photo included.
pub async fn fill_complete(wizard: &RegistrationWizard, role: Role) {
    wizard.select_role(role).await.unwrap();
    for (field, value) in complete_values(role) {
        wizard.update_field(field, value).await.unwrap();
    }
    wizard
        .select_photo(PhotoSource::Picker(png("anu.png")))
        .await
        .unwrap();
}
