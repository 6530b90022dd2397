//! Toast Manager for Zync.
//!
//! Queue of transient messages shown by the shell. Toasts expire on their
//! own after their duration; the backlog is capped so a burst of messages
//! drops the oldest instead of growing without bound.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::toast::{Toast, ToastLevel};

const DEFAULT_DURATION_MS: i64 = 4_000;
const MAX_BACKLOG: usize = 5;

/// Trait defining toast queue operations.
pub trait ToastManagerTrait {
    /// Queues a toast and returns its ID.
    fn show(&mut self, level: ToastLevel, message: &str) -> String;
    /// Removes a toast by ID. Returns whether it was present.
    fn dismiss(&mut self, id: &str) -> bool;
    /// Drops toasts older than their duration relative to `now_ms`.
    /// Returns how many were removed.
    fn expire(&mut self, now_ms: i64) -> usize;
    fn active(&self) -> Vec<&Toast>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory toast queue, oldest first.
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    fn now_ms() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }
}

impl Default for ToastManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastManagerTrait for ToastManager {
    fn show(&mut self, level: ToastLevel, message: &str) -> String {
        let id = Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            level,
            message: message.to_string(),
            created_at: Self::now_ms(),
            duration_ms: DEFAULT_DURATION_MS,
        });
        if self.toasts.len() > MAX_BACKLOG {
            let excess = self.toasts.len() - MAX_BACKLOG;
            self.toasts.drain(..excess);
        }
        id
    }

    fn dismiss(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    fn expire(&mut self, now_ms: i64) -> usize {
        let before = self.toasts.len();
        self.toasts
            .retain(|t| now_ms < t.created_at + t.duration_ms);
        before - self.toasts.len()
    }

    fn active(&self) -> Vec<&Toast> {
        self.toasts.iter().collect()
    }

    fn len(&self) -> usize {
        self.toasts.len()
    }

    fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
