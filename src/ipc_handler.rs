//! Message codec for the Zync core ↔ Electron shell protocol.
//!
//! One JSON object per line (newline-delimited JSON), three shapes:
//!
//! - Notification (shell → core): `{"channel":"update:progress","payload":{"percent":42}}`
//! - Invoke request (core → shell): `{"id":1,"method":"update:download","params":{"url":"..."}}`
//! - Invoke response (shell → core): `{"id":1,"result":{"action":"browser"}}`
//!
//! Kept separate from the IPC loop so the codec can be unit-tested.
//! Parsing is lenient where the lifecycle allows it: unknown channels are
//! ignored, a missing error message degrades to the empty string, and a
//! missing percent degrades to zero.

use serde_json::{json, Value};

use crate::services::updater_service::DownloadDisposition;
use crate::types::update::{UpdateAction, UpdateEvent, UpdateInfo, UpdateNotification};

pub const CHANNEL_UPDATE_AVAILABLE: &str = "update:available";
pub const CHANNEL_UPDATE_PROGRESS: &str = "update:progress";
pub const CHANNEL_UPDATE_DOWNLOADED: &str = "update:downloaded";
pub const CHANNEL_UPDATE_ERROR: &str = "update:error";
/// User actions forwarded by the shell's rendered notification.
pub const CHANNEL_UPDATE_ACTION: &str = "update:action";
/// Rendered view model pushed back to the shell.
pub const EVENT_UPDATE_VIEW: &str = "update:view";

pub const METHOD_UPDATE_DOWNLOAD: &str = "update:download";
pub const METHOD_UPDATE_INSTALL: &str = "update:install";

/// Parses an inbound updater notification. Returns `None` for anything
/// that is not one of the four lifecycle channels.
pub fn parse_notification(msg: &Value) -> Option<UpdateEvent> {
    let channel = msg.get("channel")?.as_str()?;
    let payload = msg.get("payload");

    match channel {
        CHANNEL_UPDATE_AVAILABLE => {
            let version = payload
                .and_then(|p| p.get("version"))
                .and_then(Value::as_str)
                .map(str::to_string);
            Some(UpdateEvent::Available(UpdateInfo { version }))
        }
        CHANNEL_UPDATE_PROGRESS => {
            let percent = payload
                .and_then(|p| p.get("percent"))
                .and_then(Value::as_f64)
                .unwrap_or(0.0);
            Some(UpdateEvent::Progress(percent))
        }
        CHANNEL_UPDATE_DOWNLOADED => Some(UpdateEvent::Downloaded),
        CHANNEL_UPDATE_ERROR => {
            let message = payload
                .and_then(|p| p.get("message"))
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            Some(UpdateEvent::Error(message))
        }
        _ => None,
    }
}

/// Parses a user action forwarded by the shell.
pub fn parse_user_action(msg: &Value) -> Option<UpdateAction> {
    if msg.get("channel")?.as_str()? != CHANNEL_UPDATE_ACTION {
        return None;
    }
    match msg.get("payload")?.get("action")?.as_str()? {
        "dismiss" => Some(UpdateAction::Dismiss),
        "download" => Some(UpdateAction::Download),
        "install" => Some(UpdateAction::Install),
        "retry" => Some(UpdateAction::Retry),
        _ => None,
    }
}

/// Encodes the download invoke request. The URL is omitted entirely when
/// none is known.
pub fn encode_download_request(id: u64, url: Option<&str>) -> Value {
    let params = match url {
        Some(u) => json!({ "url": u }),
        None => json!({}),
    };
    json!({ "id": id, "method": METHOD_UPDATE_DOWNLOAD, "params": params })
}

/// Encodes the install invoke request. No response is consumed.
pub fn encode_install_request(id: u64) -> Value {
    json!({ "id": id, "method": METHOD_UPDATE_INSTALL, "params": {} })
}

/// Encodes the rendered view model event pushed to the shell. `None`
/// means the shell should draw nothing.
pub fn encode_view_event(view: &Option<UpdateNotification>) -> Value {
    json!({ "event": EVENT_UPDATE_VIEW, "view": view })
}

/// Extracts the id of an invoke response. Messages that carry a `method`
/// field are requests, not responses, and yield `None`.
pub fn response_id(msg: &Value) -> Option<u64> {
    if msg.get("method").is_some() {
        return None;
    }
    msg.get("id").and_then(Value::as_u64)
}

/// Interprets the download response. Only `result.action == "browser"`
/// means the browser fallback; every other shape, including an absent or
/// malformed result, is the in-app path.
pub fn parse_download_disposition(resp: &Value) -> DownloadDisposition {
    match resp
        .get("result")
        .and_then(|r| r.get("action"))
        .and_then(Value::as_str)
    {
        Some("browser") => DownloadDisposition::Browser,
        _ => DownloadDisposition::InApp,
    }
}
