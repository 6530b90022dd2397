//! Zync — Rust core for a cross-platform SSH file-transfer desktop client.
//!
//! Console demo entry point: walks the providers and the update
//! notification lifecycle without a shell attached. The real shell talks
//! to the `zync-ipc` binary instead.

use zync::managers::connection_manager::{ConnectionManager, ConnectionManagerTrait};
use zync::managers::toast_manager::ToastManagerTrait;
use zync::managers::transfer_manager::{TransferManager, TransferManagerTrait};
use zync::managers::update_controller::{UpdateController, UpdateControllerTrait};
use zync::services::update_feed::UpdateFeed;
use zync::services::updater_service::{DownloadDisposition, UpdaterServiceTrait};
use zync::types::transfer::TransferDirection;
use zync::types::update::{UpdateEvent, UpdateInfo};

/// Stand-in updater for the demo: logs the invokes and downloads in-app.
struct ConsoleUpdater;

impl UpdaterServiceTrait for ConsoleUpdater {
    fn request_download(&mut self, url: Option<&str>) -> DownloadDisposition {
        println!("  -> updater invoke: download (url: {:?})", url);
        DownloadDisposition::InApp
    }

    fn request_install(&mut self) {
        println!("  -> updater invoke: install");
    }
}

fn section(name: &str) {
    println!("---------------------------------------------------------------");
    println!("  {}", name);
    println!("---------------------------------------------------------------");
}

fn main() {
    env_logger::init();

    println!();
    println!("Zync core v{} — demo mode", env!("CARGO_PKG_VERSION"));
    println!();

    demo_app_shell();
    demo_connection();
    demo_transfers();
    demo_update_lifecycle();
}

fn demo_app_shell() {
    section("App shell");
    let mut app = zync::app::App::new(None);
    app.startup();
    for toast in app.toast_manager.active() {
        println!("  toast [{:?}]: {}", toast.level, toast.message);
    }
    app.report_update_failure("");
    println!("  toasts queued: {}", app.toast_manager.len());
    app.shutdown();
}

fn demo_connection() {
    section("Connection");
    let mut conn = ConnectionManager::new();
    conn.begin_connect("files.example.com", "demo").unwrap();
    conn.confirm_connected().unwrap();
    println!("  connected: {} ({:?})", conn.is_connected(), conn.state());
    conn.disconnect().unwrap();
}

fn demo_transfers() {
    section("Transfers");
    let mut transfers = TransferManager::new();
    let id = transfers.start_transfer(
        TransferDirection::Download,
        "/home/demo/report.pdf",
        "/srv/share/report.pdf",
        Some(2048),
    );
    transfers.update_progress(&id, 1024).unwrap();
    let item = transfers.get_transfer(&id).unwrap();
    println!(
        "  {} {:?}: {:?}% ({:?})",
        item.remote_path,
        item.direction,
        item.percent(),
        item.status
    );
    transfers.complete_transfer(&id).unwrap();
    println!("  active after completion: {}", transfers.active_count());
}

fn demo_update_lifecycle() {
    section("Update lifecycle");
    let mut feed = UpdateFeed::new();
    let mut controller = UpdateController::mount(&mut feed, ConsoleUpdater);

    let script = [
        UpdateEvent::Available(UpdateInfo {
            version: Some("2.1.0".to_string()),
        }),
        UpdateEvent::Progress(35.0),
        UpdateEvent::Progress(80.0),
        UpdateEvent::Downloaded,
    ];

    for event in script {
        feed.emit(event);
        controller.pump();
        match controller.render() {
            Some(view) => println!("  [{}] {}", view.title, view.body),
            None => println!("  (nothing rendered)"),
        }
        // The user clicks through the two action points of the lifecycle.
        if controller.state().phase == zync::types::update::UpdatePhase::Available {
            controller.download();
        }
    }
    controller.install();
    controller.unmount(&mut feed);
}
