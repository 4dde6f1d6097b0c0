//! Front-end adapters for a terminal session.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::{debug, info};

use rw_core::ports::{SignInRoutePort, WizardEventPort};
use rw_core::submission::SIGN_IN_ROUTE;
use rw_core::WizardState;

/// Publishes wizard state changes to the log.
pub struct LoggingWizardEvents;

#[async_trait]
impl WizardEventPort for LoggingWizardEvents {
    async fn emit_state_changed(&self, state: &WizardState) {
        match state.errors() {
            Some(errors) => info!(?state, error_count = errors.len(), "wizard state changed"),
            None => debug!(?state, "wizard state changed"),
        }
    }
}

/// Remembers that the session was sent to sign-in.
#[derive(Default)]
pub struct ConsoleSignInRoute {
    routed: AtomicBool,
}

impl ConsoleSignInRoute {
    pub fn was_routed(&self) -> bool {
        self.routed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SignInRoutePort for ConsoleSignInRoute {
    async fn route_to_sign_in(&self) {
        self.routed.store(true, Ordering::SeqCst);
        info!(route = SIGN_IN_ROUTE, "routing to sign-in");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_route_is_recorded() {
        let route = ConsoleSignInRoute::default();
        assert!(!route.was_routed());

        route.route_to_sign_in().await;

        assert!(route.was_routed());
    }
}
