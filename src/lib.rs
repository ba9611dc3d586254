//! Shared library for `CreditManager`
//! Contains the credit book, input validation and the interactive session driven by the CLI

pub mod core;
pub mod logger;
pub mod shared;

pub use crate::core::config;
pub use shared::*;
