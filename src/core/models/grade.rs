//! Grade scale

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A letter grade on the fixed nine-step scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// A+ (4.5)
    #[serde(rename = "A+")]
    APlus,
    /// A (4.0)
    #[serde(rename = "A")]
    A,
    /// B+ (3.5)
    #[serde(rename = "B+")]
    BPlus,
    /// B (3.0)
    #[serde(rename = "B")]
    B,
    /// C+ (2.5)
    #[serde(rename = "C+")]
    CPlus,
    /// C (2.0)
    #[serde(rename = "C")]
    C,
    /// D+ (1.5)
    #[serde(rename = "D+")]
    DPlus,
    /// D (1.0)
    #[serde(rename = "D")]
    D,
    /// F (0.0)
    #[serde(rename = "F")]
    F,
}

/// Returned when a token is not one of the nine grade symbols
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown grade symbol: '{0}'")]
pub struct UnknownGrade(pub String);

impl Grade {
    /// All grades, highest score first
    pub const ALL: [Self; 9] = [
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::CPlus,
        Self::C,
        Self::DPlus,
        Self::D,
        Self::F,
    ];

    /// Numeric score used for averaging
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::APlus => 4.5,
            Self::A => 4.0,
            Self::BPlus => 3.5,
            Self::B => 3.0,
            Self::CPlus => 2.5,
            Self::C => 2.0,
            Self::DPlus => 1.5,
            Self::D => 1.0,
            Self::F => 0.0,
        }
    }

    /// The symbol as typed by the user (e.g., "B+")
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Look up a grade by its exact, case-sensitive symbol
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|grade| grade.symbol() == symbol)
    }
}

impl FromStr for Grade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| UnknownGrade(s.to_string()))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
