//! Department lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use orghub_core::AppError;

/// Lifecycle status of a department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepartmentStatus {
    /// The department is in active use.
    #[default]
    Active,
    /// The department is temporarily disabled but not removed.
    Inactive,
    /// The department has been soft-deleted. Terminal in intended use.
    Archived,
}

impl DepartmentStatus {
    /// Return the status as its wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Archived => "ARCHIVED",
        }
    }

    /// Check whether the department has been soft-deleted.
    pub fn is_archived(&self) -> bool {
        matches!(self, Self::Archived)
    }
}

impl fmt::Display for DepartmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DepartmentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "ARCHIVED" => Ok(Self::Archived),
            _ => Err(AppError::validation(format!(
                "Invalid department status: '{s}'. Expected one of: ACTIVE, INACTIVE, ARCHIVED"
            ))),
        }
    }
}
