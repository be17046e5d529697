//! Department tree nodes for hierarchical display.

use serde::{Deserialize, Serialize};

use orghub_core::types::DepartmentId;

use super::status::DepartmentStatus;

/// A node in a department tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentTreeNode {
    /// Department ID.
    pub id: DepartmentId,
    /// Generated department code.
    pub code: String,
    /// Department name.
    pub name: String,
    /// Lifecycle status.
    pub status: DepartmentStatus,
    /// Child nodes; empty once the traversal depth bound is reached.
    pub children: Vec<DepartmentTreeNode>,
}
