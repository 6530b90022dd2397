//! Boundary to the host updater living in the privileged shell process.
//!
//! The updater checks, downloads and installs releases on its own; this
//! side only sends the two invoke calls and interprets one field of the
//! download response. Failures never come back on the return path — the
//! host reports them as a later `update:error` notification.

use std::io::Write;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use log::{debug, warn};
use serde_json::Value;

use crate::ipc_handler;
use crate::types::errors::IpcError;

/// Where a requested download actually runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DownloadDisposition {
    /// The host updater downloads in-app and will stream progress events.
    #[default]
    InApp,
    /// The host opened the release page in an external browser; the update
    /// proceeds outside the application's purview.
    Browser,
}

/// Request/response boundary to the host updater.
pub trait UpdaterServiceTrait {
    /// Asks the host to download the update, passing a deep-link URL when
    /// one is known. The returned disposition is the only part of the
    /// response that is interpreted.
    fn request_download(&mut self, url: Option<&str>) -> DownloadDisposition;

    /// Asks the host to install the downloaded update. Fire-and-forget:
    /// the host is expected to restart the application underneath us.
    fn request_install(&mut self);
}

/// Release-page deep link for a known version.
///
/// Zync publishes releases on GitHub; the host updater accepts this URL
/// as the browser fallback target.
pub fn download_page_url(version: &str) -> String {
    format!(
        "https://github.com/zync-app/zync/releases/tag/v{}",
        version.trim_start_matches('v')
    )
}

/// Updater boundary speaking NDJSON invoke requests over a writer, with
/// responses routed back by id through a channel fed by the IPC read loop.
pub struct IpcUpdaterService<W: Write> {
    sink: W,
    responses: Receiver<Value>,
    next_id: u64,
    response_timeout: Duration,
}

impl<W: Write> IpcUpdaterService<W> {
    pub fn new(sink: W, responses: Receiver<Value>) -> Self {
        Self {
            sink,
            responses,
            next_id: 1,
            response_timeout: Duration::from_secs(2),
        }
    }

    /// Overrides how long a download request waits for its response before
    /// defaulting to the in-app disposition.
    pub fn with_response_timeout(mut self, timeout: Duration) -> Self {
        self.response_timeout = timeout;
        self
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    fn send(&mut self, request: &Value) -> Result<(), IpcError> {
        writeln!(self.sink, "{}", request)
            .and_then(|_| self.sink.flush())
            .map_err(|e| IpcError::WriteFailed(e.to_string()))
    }

    /// Waits for the response matching `id`, skipping responses to stale
    /// requests. Returns `None` on timeout or a closed channel.
    fn wait_for_response(&mut self, id: u64) -> Option<Value> {
        let deadline = Instant::now() + self.response_timeout;
        loop {
            let left = deadline.checked_duration_since(Instant::now())?;
            match self.responses.recv_timeout(left) {
                Ok(resp) if ipc_handler::response_id(&resp) == Some(id) => return Some(resp),
                Ok(other) => debug!("skipping stale updater response: {}", other),
                Err(_) => return None,
            }
        }
    }
}

impl<W: Write> UpdaterServiceTrait for IpcUpdaterService<W> {
    fn request_download(&mut self, url: Option<&str>) -> DownloadDisposition {
        let id = self.next_id;
        self.next_id += 1;
        let request = ipc_handler::encode_download_request(id, url);
        if let Err(e) = self.send(&request) {
            // The host will report the failed attempt as an error event.
            warn!("download request not delivered: {}", e);
            return DownloadDisposition::InApp;
        }
        match self.wait_for_response(id) {
            Some(resp) => ipc_handler::parse_download_disposition(&resp),
            None => {
                debug!("no download response within timeout, assuming in-app");
                DownloadDisposition::InApp
            }
        }
    }

    fn request_install(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        let request = ipc_handler::encode_install_request(id);
        if let Err(e) = self.send(&request) {
            warn!("install request not delivered: {}", e);
        }
    }
}
