//! Toast notifications

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastMode {
    #[default]
    Dismissible,
    Sticky,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub mode: ToastMode,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            message: message.into(),
            mode: ToastMode::Dismissible,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            message: message.into(),
            mode: ToastMode::Dismissible,
        }
    }

    /// "Error" toast with the provider's message appended verbatim
    pub fn failure(context: &str, provider_message: &str) -> Self {
        Self::error("Error", format!("{context}: {provider_message}"))
    }

    pub fn sticky(mut self) -> Self {
        self.mode = ToastMode::Sticky;
        self
    }
}

/// Fire-and-forget notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_appends_message() {
        let n = Notification::failure("Error voting", "Insufficient access");
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.title, "Error");
        assert_eq!(n.message, "Error voting: Insufficient access");
        assert_eq!(n.mode, ToastMode::Dismissible);
        assert_eq!(n.sticky().mode, ToastMode::Sticky);
    }
}
