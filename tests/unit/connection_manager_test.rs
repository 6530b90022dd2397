use zync::managers::connection_manager::{ConnectionManager, ConnectionManagerTrait};
use zync::types::connection::ConnectionState;

#[test]
fn starts_disconnected() {
    let mgr = ConnectionManager::new();
    assert_eq!(*mgr.state(), ConnectionState::Disconnected);
    assert!(!mgr.is_connected());
    assert!(mgr.last_error().is_none());
}

#[test]
fn connect_flow_reaches_connected() {
    let mut mgr = ConnectionManager::new();
    mgr.begin_connect("files.example.com", "alice").unwrap();
    assert!(!mgr.is_connected());
    mgr.confirm_connected().unwrap();
    assert!(mgr.is_connected());
    assert_eq!(mgr.state().host(), Some("files.example.com"));
}

#[test]
fn double_connect_is_rejected() {
    let mut mgr = ConnectionManager::new();
    mgr.begin_connect("a.example.com", "alice").unwrap();
    assert!(mgr.begin_connect("b.example.com", "bob").is_err());
}

#[test]
fn confirm_without_pending_attempt_is_rejected() {
    let mut mgr = ConnectionManager::new();
    assert!(mgr.confirm_connected().is_err());
}

#[test]
fn failure_records_reason_and_resets() {
    let mut mgr = ConnectionManager::new();
    mgr.begin_connect("files.example.com", "alice").unwrap();
    mgr.connection_failed("auth rejected");
    assert_eq!(*mgr.state(), ConnectionState::Disconnected);
    assert_eq!(mgr.last_error(), Some("auth rejected"));
}

#[test]
fn reconnect_clears_previous_error() {
    let mut mgr = ConnectionManager::new();
    mgr.begin_connect("files.example.com", "alice").unwrap();
    mgr.connection_failed("auth rejected");
    mgr.begin_connect("files.example.com", "alice").unwrap();
    assert!(mgr.last_error().is_none());
}

#[test]
fn disconnect_requires_a_connection() {
    let mut mgr = ConnectionManager::new();
    assert!(mgr.disconnect().is_err());
    mgr.begin_connect("files.example.com", "alice").unwrap();
    mgr.confirm_connected().unwrap();
    mgr.disconnect().unwrap();
    assert_eq!(*mgr.state(), ConnectionState::Disconnected);
}
