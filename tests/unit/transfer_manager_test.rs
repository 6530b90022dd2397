use zync::managers::transfer_manager::{TransferManager, TransferManagerTrait};
use zync::types::transfer::{TransferDirection, TransferStatus};

fn start(mgr: &mut TransferManager, total: Option<u64>) -> String {
    mgr.start_transfer(
        TransferDirection::Download,
        "/home/user/file.bin",
        "/srv/share/file.bin",
        total,
    )
}

#[test]
fn start_transfer_begins_pending() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    let item = mgr.get_transfer(&id).unwrap();
    assert_eq!(item.status, TransferStatus::Pending);
    assert_eq!(item.bytes_done, 0);
    assert_eq!(mgr.active_count(), 1);
}

#[test]
fn newest_transfer_listed_first() {
    let mut mgr = TransferManager::new();
    let _first = start(&mut mgr, None);
    let second = start(&mut mgr, None);
    assert_eq!(mgr.list_transfers()[0].id, second);
}

#[test]
fn progress_moves_to_in_progress_and_caps_at_total() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    mgr.update_progress(&id, 400).unwrap();
    let item = mgr.get_transfer(&id).unwrap();
    assert_eq!(item.status, TransferStatus::InProgress);
    assert_eq!(item.bytes_done, 400);

    mgr.update_progress(&id, 5000).unwrap();
    assert_eq!(mgr.get_transfer(&id).unwrap().bytes_done, 1000);
}

#[test]
fn progress_never_moves_backwards() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    mgr.update_progress(&id, 600).unwrap();
    mgr.update_progress(&id, 200).unwrap();
    assert_eq!(mgr.get_transfer(&id).unwrap().bytes_done, 600);
}

#[test]
fn progress_on_unknown_id_errors() {
    let mut mgr = TransferManager::new();
    assert!(mgr.update_progress("nope", 1).is_err());
}

#[test]
fn complete_sets_status_and_fills_bytes() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    mgr.update_progress(&id, 400).unwrap();
    mgr.complete_transfer(&id).unwrap();
    let item = mgr.get_transfer(&id).unwrap();
    assert_eq!(item.status, TransferStatus::Completed);
    assert_eq!(item.bytes_done, 1000);
    assert!(item.completed_at.is_some());
    assert_eq!(mgr.active_count(), 0);
}

#[test]
fn completed_transfer_rejects_further_progress() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    mgr.complete_transfer(&id).unwrap();
    assert!(mgr.update_progress(&id, 999).is_err());
    assert!(mgr.complete_transfer(&id).is_err());
}

#[test]
fn cancel_marks_failed_with_reason() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, None);
    mgr.cancel_transfer(&id).unwrap();
    assert_eq!(
        mgr.get_transfer(&id).unwrap().status,
        TransferStatus::Failed("Cancelled".to_string())
    );
}

#[test]
fn retry_resets_a_failed_transfer() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    mgr.update_progress(&id, 500).unwrap();
    mgr.fail_transfer(&id, "connection reset").unwrap();
    mgr.retry_transfer(&id).unwrap();
    let item = mgr.get_transfer(&id).unwrap();
    assert_eq!(item.status, TransferStatus::Pending);
    assert_eq!(item.bytes_done, 0);
    assert!(item.completed_at.is_none());
}

#[test]
fn retry_leaves_non_failed_transfers_alone() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, Some(1000));
    mgr.update_progress(&id, 500).unwrap();
    mgr.retry_transfer(&id).unwrap();
    let item = mgr.get_transfer(&id).unwrap();
    assert_eq!(item.status, TransferStatus::InProgress);
    assert_eq!(item.bytes_done, 500);
}

#[test]
fn percent_is_none_without_a_known_total() {
    let mut mgr = TransferManager::new();
    let id = start(&mut mgr, None);
    mgr.update_progress(&id, 500).unwrap();
    assert!(mgr.get_transfer(&id).unwrap().percent().is_none());

    let id2 = start(&mut mgr, Some(2000));
    mgr.update_progress(&id2, 500).unwrap();
    assert_eq!(mgr.get_transfer(&id2).unwrap().percent(), Some(25.0));
}
