use serde::{Deserialize, Serialize};

/// Top-level Zync settings container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub updates: UpdateSettings,
    pub transfers: TransferSettings,
    pub connection: ConnectionSettings,
}

/// Settings for the background update subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateSettings {
    /// Whether the host updater checks for updates on startup.
    pub auto_check: bool,
    /// Prefix of the IPC channels the updater notifies on.
    pub channel_prefix: String,
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self {
            auto_check: true,
            channel_prefix: "update".to_string(),
        }
    }
}

/// Settings for the transfer manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSettings {
    pub default_download_dir: String,
    pub max_concurrent: u32,
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            default_download_dir: "~/Downloads".to_string(),
            max_concurrent: 3,
        }
    }
}

/// Settings for the SSH connection layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    pub keepalive_secs: u32,
    pub connect_timeout_secs: u32,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            keepalive_secs: 30,
            connect_timeout_secs: 15,
        }
    }
}
