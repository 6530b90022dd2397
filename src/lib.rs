//! Zync — Rust core for a cross-platform SSH file-transfer desktop client.
//!
//! This library crate exposes all modules for use by the binaries and
//! integration tests. The UI runs in an Electron shell and talks to this
//! core over newline-delimited JSON on stdin/stdout.

pub mod app;
pub mod ipc_handler;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;
