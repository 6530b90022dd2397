use std::fmt;

// === UpdateError ===

/// The one kind of update failure that reaches the user.
///
/// Download, verification and install failures all collapse into a single
/// message at the presentation layer; the distinction lives in the host
/// updater, not here.
#[derive(Debug)]
pub enum UpdateError {
    Failed(String),
}

impl fmt::Display for UpdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateError::Failed(msg) => write!(f, "Update failed: {}", msg),
        }
    }
}

impl std::error::Error for UpdateError {}

// === ConnectionError ===

/// Errors related to connection lifecycle bookkeeping.
#[derive(Debug)]
pub enum ConnectionError {
    /// A connection attempt is already underway or established.
    AlreadyConnected(String),
    /// No connection exists to operate on.
    NotConnected,
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionError::AlreadyConnected(host) => {
                write!(f, "Already connected to: {}", host)
            }
            ConnectionError::NotConnected => write!(f, "Not connected"),
        }
    }
}

impl std::error::Error for ConnectionError {}

// === TransferError ===

/// Errors related to transfer management operations.
#[derive(Debug)]
pub enum TransferError {
    /// Transfer with the given ID was not found.
    NotFound(String),
    /// The transfer has already completed.
    AlreadyCompleted(String),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransferError::NotFound(id) => write!(f, "Transfer not found: {}", id),
            TransferError::AlreadyCompleted(id) => {
                write!(f, "Transfer already completed: {}", id)
            }
        }
    }
}

impl std::error::Error for TransferError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
        }
    }
}

impl std::error::Error for SettingsError {}

// === IpcError ===

/// Errors on the NDJSON channel between the core and the Electron shell.
#[derive(Debug)]
pub enum IpcError {
    /// Failed to write an outbound message.
    WriteFailed(String),
    /// An inbound line was not valid JSON or had no recognizable shape.
    MalformedMessage(String),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::WriteFailed(msg) => write!(f, "IPC write failed: {}", msg),
            IpcError::MalformedMessage(msg) => write!(f, "Malformed IPC message: {}", msg),
        }
    }
}

impl std::error::Error for IpcError {}
