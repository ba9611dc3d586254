//! CLI command handlers for `CreditManager`.
//!
//! Each command is implemented in its own submodule.

pub mod config;
pub mod session;
