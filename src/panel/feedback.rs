//! Toasts and confirm prompts
//!
//! Controllers report outcomes through a [`Notifier`] and ask before
//! destructive actions through a [`Confirm`]. The browser panel shows toasts
//! and `window.confirm`; the CLI prints status lines and reads stdin.

use std::cell::RefCell;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient status message shown after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

/// Sink for toasts
pub trait Notifier {
    fn notify(&self, toast: Toast);

    fn success(&self, message: &str) {
        self.notify(Toast::success(message));
    }

    fn error(&self, message: &str) {
        self.notify(Toast::error(message));
    }
}

/// Blocking yes/no prompt before destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed answer, used for `--yes` and in tests
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Records every toast in order
#[derive(Debug, Default)]
pub struct ToastLog {
    toasts: RefCell<Vec<Toast>>,
}

impl ToastLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.borrow().last().cloned()
    }

    pub fn take(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.toasts.borrow_mut())
    }
}

impl Notifier for ToastLog {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

/// Server-provided message when the backend sent one, otherwise `fallback`
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    err.server_message()
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_prefers_server() {
        let err = ApiError::from_status(409, r#"{"message":"Nome já existe"}"#);
        assert_eq!(failure_message(&err, "Erro ao salvar"), "Nome já existe");

        let err = ApiError::Network("connection refused".into());
        assert_eq!(failure_message(&err, "Erro ao salvar"), "Erro ao salvar");
    }

    #[test]
    fn test_toast_log_records_in_order() {
        let log = ToastLog::new();
        log.success("Criado!");
        log.error("Erro ao salvar");

        let toasts = log.take();
        assert_eq!(toasts.len(), 2);
        assert!(!toasts[0].is_error());
        assert!(toasts[1].is_error());
        assert!(log.toasts().is_empty());
    }
}
