//! Core module: credit book, grade scale, input validation and the session loop

pub mod config;
pub mod console;
pub mod errors;
pub mod input;
pub mod messages;
pub mod models;
pub mod session;
pub mod store;

pub use console::{Console, StdConsole};
pub use errors::{CommandError, InputError, StoreError};
pub use session::{CreditManager, SessionOutcome};
pub use store::{CreditBook, CreditReport};
