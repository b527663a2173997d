//! Auth context
//!
//! Wraps the shared [`AuthContext`] in a signal: filled from the profile
//! endpoint on app load, replaced on login, cleared on logout.

use leptos::*;

use dreamworks_panel::panel::{AuthContext, Redirect};
use dreamworks_panel::{ApiResult, User};

use crate::api::HttpBackend;

#[derive(Clone, Copy)]
pub struct AuthState {
    context: RwSignal<AuthContext>,
}

/// Provide the auth context and start restoring the session
pub fn provide_auth() -> AuthState {
    let state = AuthState {
        context: create_rw_signal(AuthContext::new()),
    };
    provide_context(state);

    spawn_local(async move {
        let mut context = AuthContext::new();
        context.initialize(&HttpBackend::default()).await;
        state.context.set(context);
    });

    state
}

pub fn use_auth() -> AuthState {
    use_context::<AuthState>().expect("AuthState not found")
}

impl AuthState {
    pub fn user(&self) -> Option<User> {
        self.context.with(|c| c.user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.context.with(|c| c.is_authenticated())
    }

    pub fn is_initialized(&self) -> bool {
        self.context.with(|c| c.is_initialized())
    }

    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let mut context = self.context.get_untracked();
        context
            .login(&HttpBackend::default(), email, password)
            .await?;
        self.context.set(context);
        Ok(())
    }

    pub async fn logout(&self) -> Redirect {
        let mut context = self.context.get_untracked();
        let redirect = context.logout(&HttpBackend::default()).await;
        self.context.set(context);
        redirect
    }
}
