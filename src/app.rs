//! App Core for Zync.
//!
//! Central struct wiring the providers the shell mounts around the file
//! manager view: connection, transfers, toasts, settings, and the update
//! notification feed.

use log::info;

use crate::managers::connection_manager::ConnectionManager;
use crate::managers::toast_manager::{ToastManager, ToastManagerTrait};
use crate::managers::transfer_manager::TransferManager;
use crate::managers::update_controller::FALLBACK_ERROR_TEXT;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::update_feed::UpdateFeed;
use crate::types::errors::UpdateError;
use crate::types::toast::ToastLevel;

/// Central application struct holding the providers.
///
/// The update controller is not stored here: it is generic over its
/// updater boundary and is mounted against `update_feed` by whichever
/// entry point owns the IPC transport.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub connection_manager: ConnectionManager,
    pub transfer_manager: TransferManager,
    pub toast_manager: ToastManager,
    pub update_feed: UpdateFeed,
}

impl App {
    /// Creates the App with all providers in their initial state.
    ///
    /// `config_path_override` points the settings engine at a specific
    /// file; `None` uses the platform config directory.
    pub fn new(config_path_override: Option<String>) -> Self {
        Self {
            settings_engine: SettingsEngine::new(config_path_override),
            connection_manager: ConnectionManager::new(),
            transfer_manager: TransferManager::new(),
            toast_manager: ToastManager::new(),
            update_feed: UpdateFeed::new(),
        }
    }

    /// Startup sequence: load settings and post the welcome toast.
    pub fn startup(&mut self) {
        let _ = self.settings_engine.load();
        self.toast_manager.show(ToastLevel::Info, "Welcome to Zync");
        info!("zync core started");
    }

    /// Surfaces an update failure as a toast.
    ///
    /// Update failures never touch connection or transfer state; a broken
    /// update leaves running transfers alone.
    pub fn report_update_failure(&mut self, message: &str) -> String {
        let text = if message.trim().is_empty() {
            FALLBACK_ERROR_TEXT
        } else {
            message
        };
        let err = UpdateError::Failed(text.to_string());
        self.toast_manager.show(ToastLevel::Error, &err.to_string())
    }

    /// Shutdown sequence: persist settings.
    pub fn shutdown(&mut self) {
        let _ = self.settings_engine.save();
        info!("zync core stopped");
    }
}
