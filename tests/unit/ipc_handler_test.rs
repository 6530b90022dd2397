use serde_json::json;

use zync::ipc_handler::{
    encode_download_request, encode_install_request, encode_view_event, parse_download_disposition,
    parse_notification, parse_user_action, response_id,
};
use zync::services::updater_service::DownloadDisposition;
use zync::types::update::{UpdateAction, UpdateEvent, UpdateInfo, UpdateNotification};

// === Notifications ===

#[test]
fn parses_available_with_version() {
    let msg = json!({"channel": "update:available", "payload": {"version": "2.1.0"}});
    assert_eq!(
        parse_notification(&msg),
        Some(UpdateEvent::Available(UpdateInfo {
            version: Some("2.1.0".to_string())
        }))
    );
}

#[test]
fn parses_available_without_payload() {
    let msg = json!({"channel": "update:available"});
    assert_eq!(
        parse_notification(&msg),
        Some(UpdateEvent::Available(UpdateInfo::default()))
    );
}

#[test]
fn parses_progress_percent() {
    let msg = json!({"channel": "update:progress", "payload": {"percent": 42.5}});
    assert_eq!(parse_notification(&msg), Some(UpdateEvent::Progress(42.5)));
}

#[test]
fn missing_percent_degrades_to_zero() {
    let msg = json!({"channel": "update:progress", "payload": {}});
    assert_eq!(parse_notification(&msg), Some(UpdateEvent::Progress(0.0)));
}

#[test]
fn parses_downloaded() {
    let msg = json!({"channel": "update:downloaded"});
    assert_eq!(parse_notification(&msg), Some(UpdateEvent::Downloaded));
}

#[test]
fn parses_error_message() {
    let msg = json!({"channel": "update:error", "payload": {"message": "network timeout"}});
    assert_eq!(
        parse_notification(&msg),
        Some(UpdateEvent::Error("network timeout".to_string()))
    );
}

#[test]
fn missing_error_message_degrades_to_empty() {
    let msg = json!({"channel": "update:error"});
    assert_eq!(
        parse_notification(&msg),
        Some(UpdateEvent::Error(String::new()))
    );
}

#[test]
fn unknown_channel_is_ignored() {
    assert_eq!(
        parse_notification(&json!({"channel": "transfer:progress", "payload": {}})),
        None
    );
    assert_eq!(parse_notification(&json!({"id": 1, "result": {}})), None);
}

// === User actions ===

#[test]
fn parses_all_user_actions() {
    for (name, action) in [
        ("dismiss", UpdateAction::Dismiss),
        ("download", UpdateAction::Download),
        ("install", UpdateAction::Install),
        ("retry", UpdateAction::Retry),
    ] {
        let msg = json!({"channel": "update:action", "payload": {"action": name}});
        assert_eq!(parse_user_action(&msg), Some(action));
    }
}

#[test]
fn unknown_action_is_ignored() {
    let msg = json!({"channel": "update:action", "payload": {"action": "abort"}});
    assert_eq!(parse_user_action(&msg), None);
}

// === Invoke requests and responses ===

#[test]
fn download_request_carries_url_when_known() {
    let req = encode_download_request(7, Some("https://example.com/r"));
    assert_eq!(req["id"], 7);
    assert_eq!(req["method"], "update:download");
    assert_eq!(req["params"]["url"], "https://example.com/r");

    let req = encode_download_request(8, None);
    assert!(req["params"].get("url").is_none());
}

#[test]
fn install_request_has_no_params() {
    let req = encode_install_request(9);
    assert_eq!(req["method"], "update:install");
    assert_eq!(req["params"], json!({}));
}

#[test]
fn response_id_rejects_requests() {
    assert_eq!(response_id(&json!({"id": 3, "result": {}})), Some(3));
    assert_eq!(
        response_id(&json!({"id": 3, "method": "update:install", "params": {}})),
        None
    );
    assert_eq!(response_id(&json!({"channel": "update:error"})), None);
}

#[test]
fn only_browser_action_selects_the_browser_path() {
    let browser = json!({"id": 1, "result": {"action": "browser"}});
    assert_eq!(
        parse_download_disposition(&browser),
        DownloadDisposition::Browser
    );

    for other in [
        json!({"id": 1, "result": {"action": "started"}}),
        json!({"id": 1, "result": {}}),
        json!({"id": 1}),
        json!({"id": 1, "error": "nope"}),
    ] {
        assert_eq!(
            parse_download_disposition(&other),
            DownloadDisposition::InApp
        );
    }
}

// === View events ===

#[test]
fn view_event_serializes_the_notification() {
    let view = Some(UpdateNotification {
        title: "Update Ready to Install".to_string(),
        body: "Restart now to apply the update.".to_string(),
        progress: None,
        buttons: Vec::new(),
        dismissible: true,
    });
    let event = encode_view_event(&view);
    assert_eq!(event["event"], "update:view");
    assert_eq!(event["view"]["title"], "Update Ready to Install");
}

#[test]
fn hidden_view_serializes_as_null() {
    let event = encode_view_event(&None);
    assert!(event["view"].is_null());
}
