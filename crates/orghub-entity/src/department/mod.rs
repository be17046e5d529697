//! Department entity: model, status, audit trail, and tree nodes.

pub mod audit;
pub mod model;
pub mod status;
pub mod tree;

pub use audit::{AuditAction, AuditLogEntry};
pub use model::{CreateDepartment, Department, DepartmentPatch, open_ended_valid_to};
pub use status::DepartmentStatus;
pub use tree::DepartmentTreeNode;
