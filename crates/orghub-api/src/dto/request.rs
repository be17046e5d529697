//! Request DTOs.
//!
//! The wire format is camelCase throughout; unknown fields are rejected so
//! a misspelled parameter fails loudly instead of being ignored.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use orghub_core::types::{
    DepartmentId, DepartmentSortKey, EmployeeId, LocationId, SortDirection, TenantId,
};
use orghub_entity::department::{CreateDepartment, DepartmentPatch, DepartmentStatus};
use orghub_entity::employee::{CreateEmployee, EmployeePatch, EmployeeStatus};

/// Which view of the department collection a GET /departments returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryMode {
    /// Filtered, sorted, paginated flat list.
    #[default]
    List,
    /// Recursive tree of departments.
    Tree,
    /// Direct children of one parent (or the roots).
    Children,
}

/// Query parameters for GET /api/departments.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DepartmentQuery {
    /// View selector; defaults to `list`.
    #[serde(default)]
    pub mode: DirectoryMode,
    /// Tenant override; falls back to the configured default tenant.
    pub tenant_id: Option<TenantId>,
    /// Free-text filter over name, code, and description.
    pub q: Option<String>,
    /// Status filter.
    pub status: Option<DepartmentStatus>,
    /// Parent filter (list mode) or parent selector (children mode).
    pub parent_id: Option<DepartmentId>,
    /// Department-head filter.
    pub head_id: Option<EmployeeId>,
    /// Effective-date filter (inclusive window).
    pub valid_at: Option<NaiveDate>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Page size; clamped server-side.
    pub page_size: Option<u64>,
    /// Sort key.
    pub sort_by: Option<DepartmentSortKey>,
    /// Sort direction.
    pub sort_dir: Option<SortDirection>,
    /// Subtree root (tree mode).
    pub root_id: Option<DepartmentId>,
    /// Tree depth bound (tree mode).
    pub depth: Option<u32>,
}

/// Query parameters carrying only an optional tenant override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantQuery {
    /// Tenant override; falls back to the configured default tenant.
    pub tenant_id: Option<TenantId>,
}

/// Body for POST /api/departments.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateDepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    /// Explicit code; generated when absent.
    #[validate(length(max = 32, message = "code must be at most 32 characters"))]
    pub code: Option<String>,
    /// Free-text description.
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
    pub description: Option<String>,
    /// Parent department.
    pub parent_department_id: Option<DepartmentId>,
    /// Department head.
    pub head_employee_id: Option<EmployeeId>,
    /// Office location.
    pub location_id: Option<LocationId>,
    /// Initial status.
    pub status: Option<DepartmentStatus>,
    /// Effective-from date.
    pub valid_from: Option<NaiveDate>,
    /// Effective-to date.
    pub valid_to: Option<NaiveDate>,
    /// Actor recorded on the audit entry.
    pub changed_by: Option<String>,
}

impl CreateDepartmentRequest {
    /// Convert into the entity-layer input; the tenant is assigned by the
    /// service from the request context.
    pub fn into_input(self, tenant_id: TenantId) -> CreateDepartment {
        CreateDepartment {
            tenant_id,
            name: self.name,
            code: self.code,
            description: self.description,
            parent_department_id: self.parent_department_id,
            head_employee_id: self.head_employee_id,
            location_id: self.location_id,
            status: self.status,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            changed_by: self.changed_by,
        }
    }
}

/// Body for PUT /api/departments/{id}.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateDepartmentRequest {
    /// The record version the caller last observed.
    pub version: i64,
    /// New name.
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(max = 2000, message = "description must be at most 2000 characters"))]
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
    /// Actor recorded on the audit entry.
    pub changed_by: Option<String>,
}

impl From<UpdateDepartmentRequest> for DepartmentPatch {
    fn from(req: UpdateDepartmentRequest) -> Self {
        Self {
            version: req.version,
            changed_by: req.changed_by,
            name: req.name,
            description: req.description,
            parent_department_id: req.parent_department_id,
            head_employee_id: req.head_employee_id,
            location_id: req.location_id,
            status: req.status,
            valid_from: req.valid_from,
            valid_to: req.valid_to,
        }
    }
}

/// Body for POST /api/employees.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEmployeeRequest {
    /// Employee number.
    #[validate(length(min = 1, max = 32, message = "nik must be 1-32 characters"))]
    pub nik: String,
    /// Full name.
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    /// Position code.
    pub position_code: String,
    /// Position name.
    pub position_name: String,
    /// Department name.
    pub department: String,
    /// Work email.
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Date of joining.
    pub join_date: Option<NaiveDate>,
    /// Employment status.
    pub status: Option<EmployeeStatus>,
}

impl From<CreateEmployeeRequest> for CreateEmployee {
    fn from(req: CreateEmployeeRequest) -> Self {
        Self {
            nik: req.nik,
            name: req.name,
            position_code: req.position_code,
            position_name: req.position_name,
            department: req.department,
            email: req.email,
            phone: req.phone,
            join_date: req.join_date,
            status: req.status,
        }
    }
}

/// Body for PUT /api/employees/{id}.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEmployeeRequest {
    /// New employee number.
    pub nik: Option<String>,
    /// New name.
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: Option<String>,
    /// New position code.
    pub position_code: Option<String>,
    /// New position name.
    pub position_name: Option<String>,
    /// New department name.
    pub department: Option<String>,
    /// New email.
    #[validate(email(message = "email must be a valid address"))]
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New join date.
    pub join_date: Option<NaiveDate>,
    /// New employment status.
    pub status: Option<EmployeeStatus>,
}

impl From<UpdateEmployeeRequest> for EmployeePatch {
    fn from(req: UpdateEmployeeRequest) -> Self {
        Self {
            nik: req.nik,
            name: req.name,
            position_code: req.position_code,
            position_name: req.position_name,
            department: req.department,
            email: req.email,
            phone: req.phone,
            join_date: req.join_date,
            status: req.status,
        }
    }
}
