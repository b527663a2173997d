//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use dreamworks_panel::panel::{Confirm, ImagePolicy, Notifier, Toast, ToastKind};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Sidebar expanded or collapsed
    pub sidebar_open: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Hosts entity images may be loaded from
    pub images: StoredValue<ImagePolicy>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        sidebar_open: create_rw_signal(true),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        images: store_value(ImagePolicy::default()),
    };

    provide_context(state);
}

pub fn use_global() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Image URL safe to render
    pub fn image_src(&self, url: Option<&str>) -> String {
        self.images.with_value(|policy| policy.display_url(url).to_string())
    }
}

impl Notifier for GlobalState {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => self.show_success(&toast.message),
            ToastKind::Error => self.show_error(&toast.message),
        }
    }
}

/// `window.confirm` prompt
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
