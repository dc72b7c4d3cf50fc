//! Terminal account-deletion flow.
//!
//! A small TUI that walks a user through deleting their account: pick a
//! reason, retype the account email, pass a typed confirmation gate, and
//! watch the scheduled-deletion receipt come back from the service.

pub mod config;
pub mod constants;
pub mod icons;
pub mod logger;
pub mod panel;
pub mod service;
pub mod ui;
