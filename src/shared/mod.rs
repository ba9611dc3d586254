//! Shared module for common functionality across targets

/// Returns the current version of the `CreditManager` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
