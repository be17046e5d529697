//! Department entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use orghub_core::types::{DepartmentId, EmployeeId, LocationId, TenantId};

use super::audit::AuditLogEntry;
use super::status::DepartmentStatus;

/// The `validTo` sentinel meaning "open-ended".
pub fn open_ended_valid_to() -> NaiveDate {
    NaiveDate::from_ymd_opt(9999, 12, 31).expect("static sentinel date")
}

/// An organizational unit scoped to a tenant.
///
/// Departments carry a monotonically increasing `version` used for
/// optimistic concurrency and an embedded append-only audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    /// Unique department identifier, immutable after creation.
    pub id: DepartmentId,
    /// Owning tenant; every query is scoped by it.
    pub tenant_id: TenantId,
    /// Short display code generated from a per-tenant sequence + name initials.
    pub code: String,
    /// Department name.
    pub name: String,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent department within the same tenant; `None` means root-level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_department_id: Option<DepartmentId>,
    /// Department head. Collaborator-owned reference, never validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_employee_id: Option<EmployeeId>,
    /// Office location. Collaborator-owned reference, never validated here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<LocationId>,
    /// Lifecycle status.
    pub status: DepartmentStatus,
    /// Start of the effective-date window (inclusive).
    pub valid_from: NaiveDate,
    /// End of the effective-date window (inclusive); `9999-12-31` = open-ended.
    pub valid_to: NaiveDate,
    /// Optimistic-concurrency version, starts at 1, +1 per mutation.
    pub version: i64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Append-only audit trail, oldest first.
    pub audit: Vec<AuditLogEntry>,
}

/// Data required to create a new department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    /// Owning tenant.
    pub tenant_id: TenantId,
    /// Department name (required, non-empty).
    pub name: String,
    /// Explicit code; generated when absent.
    pub code: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Parent department; must exist in the same tenant when present.
    pub parent_department_id: Option<DepartmentId>,
    /// Department head reference.
    pub head_employee_id: Option<EmployeeId>,
    /// Office location reference.
    pub location_id: Option<LocationId>,
    /// Initial status; defaults to `ACTIVE`.
    pub status: Option<DepartmentStatus>,
    /// Effective-from date; defaults to the current date.
    pub valid_from: Option<NaiveDate>,
    /// Effective-to date; defaults to the open-ended sentinel.
    pub valid_to: Option<NaiveDate>,
    /// Actor recorded on the CREATE audit entry; defaults to `"system"`.
    pub changed_by: Option<String>,
}

/// A partial update to a department.
///
/// `version` must carry the version the caller last observed. Optional
/// fields mean "set when present"; there is no way to clear a field back
/// to `None` through a patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentPatch {
    /// The record version the caller read before editing.
    pub version: i64,
    /// Actor recorded on the audit entry; defaults to `"system"`.
    pub changed_by: Option<String>,
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New parent department.
    pub parent_department_id: Option<DepartmentId>,
    /// New department head.
    pub head_employee_id: Option<EmployeeId>,
    /// New location.
    pub location_id: Option<LocationId>,
    /// New lifecycle status.
    pub status: Option<DepartmentStatus>,
    /// New effective-from date.
    pub valid_from: Option<NaiveDate>,
    /// New effective-to date.
    pub valid_to: Option<NaiveDate>,
}

impl Department {
    /// Check if this is a root department (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_department_id.is_none()
    }

    /// Check whether the effective-date window contains `date` (inclusive).
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        self.valid_from <= date && date <= self.valid_to
    }
}
