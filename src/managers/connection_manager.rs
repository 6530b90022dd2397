//! Connection Manager for Zync.
//!
//! Bookkeeping for the SSH connection the file manager operates over.
//! The actual transport lives in the host process; this tracks the
//! lifecycle the UI presents.

use log::info;

use crate::types::connection::ConnectionState;
use crate::types::errors::ConnectionError;

/// Trait defining connection lifecycle operations.
pub trait ConnectionManagerTrait {
    /// Begins a connection attempt. Fails if one is already underway or
    /// established.
    fn begin_connect(&mut self, host: &str, username: &str) -> Result<(), ConnectionError>;
    /// Marks the pending attempt as established.
    fn confirm_connected(&mut self) -> Result<(), ConnectionError>;
    /// Records a failed attempt or a dropped connection.
    fn connection_failed(&mut self, reason: &str);
    fn disconnect(&mut self) -> Result<(), ConnectionError>;
    fn state(&self) -> &ConnectionState;
    fn is_connected(&self) -> bool;
    fn last_error(&self) -> Option<&str>;
}

/// In-memory connection state tracker.
pub struct ConnectionManager {
    state: ConnectionState,
    last_error: Option<String>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Disconnected,
            last_error: None,
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionManagerTrait for ConnectionManager {
    fn begin_connect(&mut self, host: &str, username: &str) -> Result<(), ConnectionError> {
        if let Some(current) = self.state.host() {
            return Err(ConnectionError::AlreadyConnected(current.to_string()));
        }
        info!("connecting to {}@{}", username, host);
        self.state = ConnectionState::Connecting {
            host: host.to_string(),
            username: username.to_string(),
        };
        self.last_error = None;
        Ok(())
    }

    fn confirm_connected(&mut self) -> Result<(), ConnectionError> {
        match &self.state {
            ConnectionState::Connecting { host, username } => {
                self.state = ConnectionState::Connected {
                    host: host.clone(),
                    username: username.clone(),
                };
                Ok(())
            }
            _ => Err(ConnectionError::NotConnected),
        }
    }

    fn connection_failed(&mut self, reason: &str) {
        info!("connection failed: {}", reason);
        self.state = ConnectionState::Disconnected;
        self.last_error = Some(reason.to_string());
    }

    fn disconnect(&mut self) -> Result<(), ConnectionError> {
        match self.state {
            ConnectionState::Disconnected => Err(ConnectionError::NotConnected),
            _ => {
                self.state = ConnectionState::Disconnected;
                Ok(())
            }
        }
    }

    fn state(&self) -> &ConnectionState {
        &self.state
    }

    fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected { .. })
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
