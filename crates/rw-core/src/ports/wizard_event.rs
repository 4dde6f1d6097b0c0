use crate::wizard::WizardState;

#[async_trait::async_trait]
pub trait WizardEventPort: Send + Sync {
    async fn emit_state_changed(&self, state: &WizardState);
}
