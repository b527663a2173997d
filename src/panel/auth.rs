//! Auth Context
//!
//! Holds the signed-in user. Created explicitly at app start, filled from
//! the profile endpoint, replaced on login and cleared on logout.

use crate::error::ApiResult;
use crate::models::{LoginRequest, User};
use crate::services::AuthApi;

/// Where the app navigates after logout
pub const AFTER_LOGOUT: &str = "/";

/// Navigation target produced by an auth action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect(pub &'static str);

/// Current session's user, or `None` when the profile call fails
pub async fn restore_session(api: &dyn AuthApi) -> Option<User> {
    match api.profile().await {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::debug!(error = %e, "No active session");
            None
        }
    }
}

/// End the session. Backend failures are logged and swallowed; the
/// redirect is always produced.
pub async fn sign_out(api: &dyn AuthApi) -> Redirect {
    if let Err(e) = api.logout().await {
        tracing::error!(error = %e, "Erro ao fazer logout");
    }
    Redirect(AFTER_LOGOUT)
}

#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    user: Option<User>,
    initialized: bool,
}

impl AuthContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the profile of the current session
    pub async fn initialize(&mut self, api: &dyn AuthApi) {
        self.user = restore_session(api).await;
        self.initialized = true;
    }

    pub async fn login(&mut self, api: &dyn AuthApi, email: &str, password: &str) -> ApiResult<&User> {
        let response = api
            .login(&LoginRequest {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await?;

        tracing::info!(email = %response.user.email, "Signed in");
        self.initialized = true;
        let user = self.user.insert(response.user);
        Ok(&*user)
    }

    pub async fn logout(&mut self, api: &dyn AuthApi) -> Redirect {
        let redirect = sign_out(api).await;
        self.user = None;
        redirect
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
