//! Admin model

use crate::core::csv::join_record;
use std::fmt;

/// Record type tag written in the first column of every admin row
pub const ADMIN_RECORD_TAG: &str = "ADMIN";

/// An administrator of the record system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admin {
    /// Admin number (e.g., "1001")
    pub admin_num: String,
    /// Full display name
    pub full_name: String,
}

impl Admin {
    /// Create a new admin
    #[must_use]
    pub fn new(admin_num: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            admin_num: admin_num.into(),
            full_name: full_name.into(),
        }
    }

    /// Render the admin as one CSV row: `ADMIN,<admin_num>,<full_name>`
    #[must_use]
    pub fn to_csv_record(&self) -> String {
        join_record(&[
            ADMIN_RECORD_TAG,
            self.admin_num.as_str(),
            self.full_name.as_str(),
        ])
    }
}

impl fmt::Display for Admin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Admin ID: {}", self.admin_num)?;
        write!(f, "Name: {}", self.full_name)
    }
}
