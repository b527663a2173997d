//! State Management
//!
//! Global UI state (toasts, sidebar) and the auth context.

pub mod auth;
pub mod global;

pub use auth::{provide_auth, use_auth, AuthState};
pub use global::{provide_global_state, use_global, BrowserConfirm, GlobalState};
