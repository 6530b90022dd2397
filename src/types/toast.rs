use serde::{Deserialize, Serialize};

/// Severity level of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// A transient message shown by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// How long the toast stays up before it expires.
    pub duration_ms: i64,
}
