// Zync shared type definitions
// Each submodule defines types used across the application.

pub mod connection;
pub mod errors;
pub mod settings;
pub mod toast;
pub mod transfer;
pub mod update;
