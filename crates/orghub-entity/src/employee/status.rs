//! Employee status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Employment status of an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    /// Currently employed.
    #[default]
    Active,
    /// No longer active (leave, resignation, etc.).
    Inactive,
}

impl EmployeeStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
