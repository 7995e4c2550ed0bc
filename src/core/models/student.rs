//! Student and academic term models

use std::fmt;
use std::str::FromStr;

/// A student being scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Student identifier (e.g., "900123456")
    pub id: String,
    /// Full name as printed on the transcript
    pub name: String,
}

impl Student {
    /// Create a new student
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Academic term within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semester {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
    /// Winter term
    Winter,
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        };
        f.write_str(label)
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            _ => Err(format!(
                "Unknown semester '{s}' (expected spring, summer, fall, or winter)"
            )),
        }
    }
}
