/// Leaves the wizard for the sign-in surface after a successful registration.
#[async_trait::async_trait]
pub trait SignInRoutePort: Send + Sync {
    async fn route_to_sign_in(&self);
}
