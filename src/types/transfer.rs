use serde::{Deserialize, Serialize};

/// Direction of a file transfer relative to the local machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferDirection {
    Upload,
    Download,
}

/// Status of a file transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    Pending,
    InProgress,
    Completed,
    Failed(String),
}

/// A single tracked transfer between a local path and a remote path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferItem {
    pub id: String,
    pub direction: TransferDirection,
    pub local_path: String,
    pub remote_path: String,
    /// Total size when the remote reported one.
    pub bytes_total: Option<u64>,
    pub bytes_done: u64,
    pub status: TransferStatus,
    pub started_at: i64,
    pub completed_at: Option<i64>,
}

impl TransferItem {
    /// Completed fraction in [0,100], or `None` when the size is unknown.
    pub fn percent(&self) -> Option<f64> {
        match self.bytes_total {
            Some(0) | None => None,
            Some(total) => Some((self.bytes_done as f64 / total as f64 * 100.0).min(100.0)),
        }
    }
}
