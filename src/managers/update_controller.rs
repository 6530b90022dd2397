//! Update view-state controller.
//!
//! Owns the small state machine behind the update toast: lifecycle
//! notifications from the host updater move the phase forward, user
//! actions call back into the updater, and `render` projects the state
//! into a declarative view model for the shell to draw.
//!
//! Single-writer discipline: only the controller mutates its state, by
//! draining its feed receiver on `pump` or by handling a user action.
//! Nothing here blocks; both boundary calls are fire-and-forget from the
//! controller's point of view.

use std::sync::mpsc::Receiver;

use log::{debug, info};

use crate::services::update_feed::{Subscription, UpdateFeed};
use crate::services::updater_service::{
    download_page_url, DownloadDisposition, UpdaterServiceTrait,
};
use crate::types::update::{
    NotificationButton, UpdateAction, UpdateEvent, UpdateNotification, UpdatePhase,
    UpdateViewState,
};

/// Shown in place of an empty error message from the host updater.
pub const FALLBACK_ERROR_TEXT: &str = "The update could not be completed. Please try again.";

/// Trait defining the update controller operations.
pub trait UpdateControllerTrait {
    /// Drains pending notifications from the feed, applying each in
    /// emission order. Returns how many were applied.
    fn pump(&mut self) -> usize;
    /// Applies a single lifecycle notification.
    fn apply(&mut self, event: UpdateEvent);
    /// "Download" pressed while an update is available.
    fn download(&mut self);
    /// "Restart & Install" pressed while the update is ready.
    fn install(&mut self);
    /// Close control or "Later" pressed.
    fn dismiss(&mut self);
    /// "Try Again" pressed after a failure.
    fn retry(&mut self);
    fn state(&self) -> &UpdateViewState;
    fn render(&self) -> Option<UpdateNotification>;
}

/// The update view-state controller.
///
/// Created with [`UpdateController::mount`], which subscribes it to an
/// [`UpdateFeed`]. Dropping the controller detaches it from the feed on
/// any exit path; [`UpdateController::unmount`] releases the subscription
/// eagerly.
pub struct UpdateController<S: UpdaterServiceTrait> {
    state: UpdateViewState,
    service: S,
    events: Receiver<UpdateEvent>,
    subscription: Subscription,
}

impl<S: UpdaterServiceTrait> UpdateController<S> {
    /// Subscribes to the feed and starts with a fresh hidden state.
    pub fn mount(feed: &mut UpdateFeed, service: S) -> Self {
        let (subscription, events) = feed.subscribe();
        debug!("update controller mounted");
        Self {
            state: UpdateViewState::default(),
            service,
            events,
            subscription,
        }
    }

    /// Releases the feed subscription. In-flight download or install
    /// requests are not cancelled; they are the host's to finish.
    pub fn unmount(self, feed: &mut UpdateFeed) {
        feed.unsubscribe(self.subscription);
        debug!("update controller unmounted");
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Moves to `phase`, clearing the error message whenever the phase
    /// leaves Error.
    fn set_phase(&mut self, phase: UpdatePhase) {
        if self.state.phase == UpdatePhase::Error && phase != UpdatePhase::Error {
            self.state.error_message.clear();
        }
        self.state.phase = phase;
    }

    /// Optimistic entry into Downloading ahead of the first progress
    /// notification, so the indicator appears without a visible gap.
    fn begin_download_optimistically(&mut self) {
        self.set_phase(UpdatePhase::Downloading);
        self.state.progress_percent = 0.0;
        self.state.visible = true;
    }

    /// Shared body of `download` and `retry`.
    fn request_download(&mut self) {
        let url = self
            .state
            .update_info
            .as_ref()
            .and_then(|info| info.version.as_deref())
            .map(download_page_url);

        match self.service.request_download(url.as_deref()) {
            DownloadDisposition::Browser => {
                // The update continues in an external browser; hide the
                // toast without touching the phase.
                info!("update download handed off to external browser");
                self.state.visible = false;
            }
            DownloadDisposition::InApp => self.begin_download_optimistically(),
        }
    }
}

impl<S: UpdaterServiceTrait> UpdateControllerTrait for UpdateController<S> {
    fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    fn apply(&mut self, event: UpdateEvent) {
        match event {
            UpdateEvent::Available(info) => {
                // Duplicate `available` notifications act as idempotent
                // resets: a fresh attempt starts at zero progress.
                self.set_phase(UpdatePhase::Available);
                self.state.update_info = Some(info);
                self.state.progress_percent = 0.0;
                self.state.visible = true;
            }
            UpdateEvent::Progress(percent) => {
                let clamped = percent.clamp(0.0, 100.0);
                self.state.progress_percent = if self.state.phase == UpdatePhase::Downloading {
                    // Monotonic within one download attempt.
                    self.state.progress_percent.max(clamped)
                } else {
                    clamped
                };
                self.set_phase(UpdatePhase::Downloading);
                self.state.visible = true;
            }
            UpdateEvent::Downloaded => {
                self.set_phase(UpdatePhase::Ready);
                self.state.visible = true;
            }
            UpdateEvent::Error(message) => {
                self.state.phase = UpdatePhase::Error;
                self.state.error_message = message;
                self.state.visible = true;
            }
        }
    }

    fn download(&mut self) {
        if self.state.phase != UpdatePhase::Available {
            debug!("download ignored outside Available phase");
            return;
        }
        self.request_download();
    }

    fn install(&mut self) {
        if self.state.phase != UpdatePhase::Ready {
            debug!("install ignored outside Ready phase");
            return;
        }
        // No return path is modeled: the host restarts the application.
        self.service.request_install();
    }

    fn dismiss(&mut self) {
        self.state.visible = false;
        if self.state.phase == UpdatePhase::Error {
            self.state.phase = UpdatePhase::Idle;
            self.state.error_message.clear();
        }
    }

    fn retry(&mut self) {
        if self.state.phase != UpdatePhase::Error {
            debug!("retry ignored outside Error phase");
            return;
        }
        self.request_download();
    }

    fn state(&self) -> &UpdateViewState {
        &self.state
    }

    fn render(&self) -> Option<UpdateNotification> {
        render_notification(&self.state)
    }
}

/// Pure rendering contract: a view model from the state, no side effects.
///
/// Nothing is rendered while the toast is dismissed or before the
/// lifecycle produced anything worth showing.
pub fn render_notification(state: &UpdateViewState) -> Option<UpdateNotification> {
    if !state.visible {
        return None;
    }

    let notification = match state.phase {
        UpdatePhase::Idle | UpdatePhase::Checking => return None,
        UpdatePhase::Available => {
            let title = match state
                .update_info
                .as_ref()
                .and_then(|info| info.version.as_deref())
            {
                Some(version) => {
                    format!("Update Available (v{})", version.trim_start_matches('v'))
                }
                None => "New Update Available".to_string(),
            };
            UpdateNotification {
                title,
                body: "A new version of Zync is available.".to_string(),
                progress: None,
                buttons: vec![
                    NotificationButton {
                        label: "Later".to_string(),
                        action: UpdateAction::Dismiss,
                    },
                    NotificationButton {
                        label: "Download".to_string(),
                        action: UpdateAction::Download,
                    },
                ],
                dismissible: true,
            }
        }
        UpdatePhase::Downloading => UpdateNotification {
            title: "Downloading Update...".to_string(),
            body: format!("{}% downloaded", state.progress_percent.round() as u32),
            progress: Some(state.progress_percent),
            // Aborting a running download is not offered.
            buttons: Vec::new(),
            dismissible: true,
        },
        UpdatePhase::Ready => UpdateNotification {
            title: "Update Ready to Install".to_string(),
            body: "Restart now to apply the update.".to_string(),
            progress: None,
            buttons: vec![NotificationButton {
                label: "Restart & Install".to_string(),
                action: UpdateAction::Install,
            }],
            dismissible: true,
        },
        UpdatePhase::Error => {
            let body = if state.error_message.trim().is_empty() {
                FALLBACK_ERROR_TEXT.to_string()
            } else {
                state.error_message.clone()
            };
            UpdateNotification {
                title: "Update Failed".to_string(),
                body,
                progress: None,
                buttons: vec![NotificationButton {
                    label: "Try Again".to_string(),
                    action: UpdateAction::Retry,
                }],
                dismissible: true,
            }
        }
    };

    Some(notification)
}
