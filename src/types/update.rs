use serde::{Deserialize, Serialize};

/// Lifecycle stage of a background update attempt.
///
/// Exactly one phase is active at a time. `Checking` is reported by some
/// host shells but renders the same as `Idle`; it is kept so matches over
/// the phase stay exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdatePhase {
    Idle,
    Checking,
    Available,
    Downloading,
    Ready,
    Error,
}

/// Metadata attached to an available update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// Target version identifier, e.g. "2.1.0". The host shell may omit it.
    pub version: Option<String>,
}

/// Lifecycle notification delivered by the host updater.
///
/// Notifications are idempotent overrides: the last one received dictates
/// the phase, nothing is merged.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateEvent {
    Available(UpdateInfo),
    Progress(f64),
    Downloaded,
    Error(String),
}

/// The single mutable value owned by the update controller.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateViewState {
    pub phase: UpdatePhase,
    /// Clamped to [0,100]; meaningful only while Downloading.
    pub progress_percent: f64,
    /// Meaningful only in Error; cleared whenever the phase leaves Error.
    pub error_message: String,
    /// Set on Available, carried through Downloading/Ready for display.
    pub update_info: Option<UpdateInfo>,
    /// Independent dismissal flag: a hidden notification does not stop the
    /// lifecycle (a download keeps going after "Later").
    pub visible: bool,
}

impl Default for UpdateViewState {
    fn default() -> Self {
        Self {
            phase: UpdatePhase::Idle,
            progress_percent: 0.0,
            error_message: String::new(),
            update_info: None,
            visible: false,
        }
    }
}

/// User action a notification button maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateAction {
    Dismiss,
    Download,
    Install,
    Retry,
}

/// A labelled button in the rendered notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationButton {
    pub label: String,
    pub action: UpdateAction,
}

/// Declarative view model for the update toast, handed to the shell to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNotification {
    pub title: String,
    pub body: String,
    /// Fill level for the progress indicator; `Some` only while Downloading.
    pub progress: Option<f64>,
    pub buttons: Vec<NotificationButton>,
    /// The close icon is always offered; it routes to `Dismiss`.
    pub dismissible: bool,
}
