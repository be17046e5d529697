//! Sorting types for list endpoints.
//!
//! Both enums are closed sets deserialized at the HTTP boundary, so an
//! unknown sort key or direction is rejected before it reaches the store.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering.
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// The department fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum DepartmentSortKey {
    /// Sort by department name.
    #[default]
    Name,
    /// Sort by generated department code.
    Code,
    /// Sort by creation timestamp.
    CreatedAt,
}
