//! Student and subject models
//!
//! Both are identified by name alone, so equality, hashing and ordering are
//! derived from the wrapped string.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A student tracked by the credit book
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Student {
    name: String,
}

impl Student {
    /// Create a student with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The student's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A subject (course) a student can hold a grade in
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject {
    name: String,
}

impl Subject {
    /// Create a subject with the given name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The subject's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

// Lookups by `&str` keep callers from allocating just to query the book.
impl Borrow<str> for Student {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl Borrow<str> for Subject {
    fn borrow(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
