//! Zync IPC loop — newline-delimited JSON over stdin/stdout for the
//! Electron shell.
//!
//! Inbound lines are either updater notifications, user actions forwarded
//! from the rendered toast, or responses to invoke requests this side
//! sent. After every applied notification or action the freshly rendered
//! view model is pushed back so the shell can redraw.

use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use log::{debug, warn};
use serde_json::{json, Value};

use zync::ipc_handler;
use zync::managers::update_controller::{UpdateController, UpdateControllerTrait};
use zync::services::update_feed::UpdateFeed;
use zync::services::updater_service::IpcUpdaterService;
use zync::types::errors::IpcError;
use zync::types::update::UpdateAction;

fn main() {
    env_logger::init();

    // Signal ready
    let ready = json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")});
    println!("{}", ready);
    io::stdout().flush().unwrap();

    let (msg_tx, msg_rx) = mpsc::channel::<Value>();
    let (resp_tx, resp_rx) = mpsc::channel::<Value>();

    // Reader thread. Invoke responses are routed onto their own channel
    // so a download request can wait for its disposition while further
    // notifications queue up behind it.
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!("stdin read failed: {}", e);
                    break;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let msg: Value = match serde_json::from_str(&line) {
                Ok(v) => v,
                Err(e) => {
                    warn!("{}", IpcError::MalformedMessage(e.to_string()));
                    continue;
                }
            };
            let routed = if ipc_handler::response_id(&msg).is_some() {
                resp_tx.send(msg)
            } else {
                msg_tx.send(msg)
            };
            if routed.is_err() {
                break;
            }
        }
    });

    let mut feed = UpdateFeed::new();
    let service = IpcUpdaterService::new(io::stdout(), resp_rx);
    let mut controller = UpdateController::mount(&mut feed, service);

    for msg in msg_rx {
        if let Some(event) = ipc_handler::parse_notification(&msg) {
            feed.emit(event);
            controller.pump();
        } else if let Some(action) = ipc_handler::parse_user_action(&msg) {
            match action {
                UpdateAction::Dismiss => controller.dismiss(),
                UpdateAction::Download => controller.download(),
                UpdateAction::Install => controller.install(),
                UpdateAction::Retry => controller.retry(),
            }
        } else {
            debug!("ignoring unrecognized ipc message: {}", msg);
            continue;
        }

        println!("{}", ipc_handler::encode_view_event(&controller.render()));
        io::stdout().flush().unwrap();
    }

    // stdin closed: the shell went away.
    controller.unmount(&mut feed);
}
