//! Transfer Manager for Zync.
//!
//! Tracks uploads and downloads between the local machine and the remote
//! host: progress bookkeeping, cancel and retry. The transfer engine
//! itself (SFTP streams) lives in the host process; this is the state the
//! UI renders.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TransferError;
use crate::types::transfer::{TransferDirection, TransferItem, TransferStatus};

/// Trait defining transfer management operations.
pub trait TransferManagerTrait {
    fn start_transfer(
        &mut self,
        direction: TransferDirection,
        local_path: &str,
        remote_path: &str,
        bytes_total: Option<u64>,
    ) -> String;
    fn update_progress(&mut self, id: &str, bytes_done: u64) -> Result<(), TransferError>;
    fn complete_transfer(&mut self, id: &str) -> Result<(), TransferError>;
    fn fail_transfer(&mut self, id: &str, reason: &str) -> Result<(), TransferError>;
    fn cancel_transfer(&mut self, id: &str) -> Result<(), TransferError>;
    fn retry_transfer(&mut self, id: &str) -> Result<(), TransferError>;
    fn list_transfers(&self) -> Vec<&TransferItem>;
    fn get_transfer(&self, id: &str) -> Option<&TransferItem>;
    fn active_count(&self) -> usize;
}

/// In-memory transfer manager. Newest transfers first.
pub struct TransferManager {
    transfers: Vec<TransferItem>,
}

impl TransferManager {
    pub fn new() -> Self {
        Self {
            transfers: Vec::new(),
        }
    }

    fn now_ts() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_index(&self, id: &str) -> Result<usize, TransferError> {
        self.transfers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| TransferError::NotFound(id.to_string()))
    }
}

impl Default for TransferManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferManagerTrait for TransferManager {
    /// Registers a new transfer in Pending state and returns its ID.
    fn start_transfer(
        &mut self,
        direction: TransferDirection,
        local_path: &str,
        remote_path: &str,
        bytes_total: Option<u64>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let item = TransferItem {
            id: id.clone(),
            direction,
            local_path: local_path.to_string(),
            remote_path: remote_path.to_string(),
            bytes_total,
            bytes_done: 0,
            status: TransferStatus::Pending,
            started_at: Self::now_ts(),
            completed_at: None,
        };
        self.transfers.insert(0, item);
        id
    }

    /// Records progress. Moves Pending transfers to InProgress; byte
    /// counts are capped at the known total and never move backwards.
    fn update_progress(&mut self, id: &str, bytes_done: u64) -> Result<(), TransferError> {
        let idx = self.find_index(id)?;
        let item = &mut self.transfers[idx];
        match item.status {
            TransferStatus::Completed => Err(TransferError::AlreadyCompleted(id.to_string())),
            TransferStatus::Failed(_) => Ok(()),
            _ => {
                let capped = match item.bytes_total {
                    Some(total) => bytes_done.min(total),
                    None => bytes_done,
                };
                item.bytes_done = item.bytes_done.max(capped);
                item.status = TransferStatus::InProgress;
                Ok(())
            }
        }
    }

    fn complete_transfer(&mut self, id: &str) -> Result<(), TransferError> {
        let idx = self.find_index(id)?;
        let item = &mut self.transfers[idx];
        if item.status == TransferStatus::Completed {
            return Err(TransferError::AlreadyCompleted(id.to_string()));
        }
        if let Some(total) = item.bytes_total {
            item.bytes_done = total;
        }
        item.status = TransferStatus::Completed;
        item.completed_at = Some(Self::now_ts());
        Ok(())
    }

    fn fail_transfer(&mut self, id: &str, reason: &str) -> Result<(), TransferError> {
        let idx = self.find_index(id)?;
        let item = &mut self.transfers[idx];
        if item.status == TransferStatus::Completed {
            return Err(TransferError::AlreadyCompleted(id.to_string()));
        }
        item.status = TransferStatus::Failed(reason.to_string());
        item.completed_at = Some(Self::now_ts());
        Ok(())
    }

    fn cancel_transfer(&mut self, id: &str) -> Result<(), TransferError> {
        self.fail_transfer(id, "Cancelled")
    }

    /// Puts a failed transfer back into Pending with its counters reset.
    /// Other states are left alone.
    fn retry_transfer(&mut self, id: &str) -> Result<(), TransferError> {
        let idx = self.find_index(id)?;
        let item = &mut self.transfers[idx];
        if let TransferStatus::Failed(_) = item.status {
            item.status = TransferStatus::Pending;
            item.bytes_done = 0;
            item.completed_at = None;
            item.started_at = Self::now_ts();
        }
        Ok(())
    }

    fn list_transfers(&self) -> Vec<&TransferItem> {
        self.transfers.iter().collect()
    }

    fn get_transfer(&self, id: &str) -> Option<&TransferItem> {
        self.transfers.iter().find(|t| t.id == id)
    }

    /// Transfers currently Pending or InProgress.
    fn active_count(&self) -> usize {
        self.transfers
            .iter()
            .filter(|t| {
                matches!(
                    t.status,
                    TransferStatus::Pending | TransferStatus::InProgress
                )
            })
            .count()
    }
}
