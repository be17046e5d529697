//! Response DTOs.

use serde::{Deserialize, Serialize};

use orghub_entity::department::Department;

/// Body of GET /api/departments/{id}: the record plus its resolved
/// ancestor path (root first, the department itself last).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentWithPath {
    /// The department record.
    pub data: Department,
    /// Ancestor path from root to this department.
    pub path: Vec<Department>,
}

/// Body of GET /api/health.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always `"ok"` when the process is serving.
    pub status: String,
    /// Crate version.
    pub version: String,
}
