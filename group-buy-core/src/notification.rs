//! Toast notification descriptors
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOAST_DURATION_MS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A transient banner shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            duration_ms: DEFAULT_TOAST_DURATION_MS,
        }
    }

    #[must_use]
    pub const fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Class list for the banner element.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("group-buy-toast group-buy-toast--{}", self.kind.as_str())
    }
}
