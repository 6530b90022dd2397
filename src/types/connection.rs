use serde::{Deserialize, Serialize};

/// Lifecycle of the SSH connection the file manager operates over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Disconnected,
    Connecting { host: String, username: String },
    Connected { host: String, username: String },
}

impl ConnectionState {
    /// Host of the current or pending connection, if any.
    pub fn host(&self) -> Option<&str> {
        match self {
            ConnectionState::Disconnected => None,
            ConnectionState::Connecting { host, .. } | ConnectionState::Connected { host, .. } => {
                Some(host)
            }
        }
    }
}
