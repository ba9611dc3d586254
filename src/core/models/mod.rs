//! Data models for `CreditManager`

pub mod grade;
pub mod student;

pub use grade::{Grade, UnknownGrade};
pub use student::{Student, Subject};
