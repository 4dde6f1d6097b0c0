//! Dependency wiring: builds the wizard with its concrete adapters.
//! 依赖注入：为向导装配具体适配器。

use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use rw_app::{RegistrationWizard, RegistrationWizardDeps};
use rw_core::config::AppConfig;
use rw_infra::{
    HttpRegistrationGateway, ImagePreviewRenderer, InMemoryPreviewStore, PreviewConfig,
    RegistrationClientConfig,
};

use crate::adapters::{ConsoleSignInRoute, LoggingWizardEvents};

/// A wired wizard plus the adapters callers may want to look at afterwards.
pub struct WizardRuntime {
    pub wizard: RegistrationWizard,
    pub previews: Arc<InMemoryPreviewStore>,
    pub sign_in: Arc<ConsoleSignInRoute>,
}

/// Wire all dependencies for a fresh wizard.
pub fn build_wizard(config: &AppConfig) -> anyhow::Result<WizardRuntime> {
    let client_config = RegistrationClientConfig::from_app_config(config)
        .context("Invalid registration settings")?;
    let preview_config = PreviewConfig::from_app_config(config);

    let gateway = HttpRegistrationGateway::new(&client_config)
        .context("Failed to build registration HTTP client")?;
    info!(
        endpoint = %gateway.endpoint(),
        photo_transport = %client_config.photo_transport,
        "registration gateway ready"
    );

    let previews = Arc::new(InMemoryPreviewStore::new());
    let sign_in = Arc::new(ConsoleSignInRoute::default());

    let wizard = RegistrationWizard::new(RegistrationWizardDeps {
        gateway: Arc::new(gateway),
        preview_renderer: Arc::new(ImagePreviewRenderer::new(preview_config.max_edge)),
        preview_store: previews.clone(),
        events: Arc::new(LoggingWizardEvents),
        sign_in: sign_in.clone(),
    });

    Ok(WizardRuntime {
        wizard,
        previews,
        sign_in,
    })
}
