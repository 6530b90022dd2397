// Zync state managers
// Managers handle stateful operations: the update view-state controller,
// transfers, toasts, and the connection lifecycle.

pub mod connection_manager;
pub mod toast_manager;
pub mod transfer_manager;
pub mod update_controller;
