//! Employee entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orghub_core::types::EmployeeId;

use super::status::EmployeeStatus;

/// An employee directory record.
///
/// Unlike departments, employee records carry no version counter and no
/// audit trail; updates are last-write-wins and deletion is hard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Employee number (e.g. `EMP-0001`).
    pub nik: String,
    /// Full name.
    pub name: String,
    /// Position code (e.g. `ENG2`).
    pub position_code: String,
    /// Human-readable position name.
    pub position_name: String,
    /// Department name the employee belongs to.
    pub department: String,
    /// Work email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Date of joining.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    /// Employment status.
    pub status: EmployeeStatus,
}

/// Data required to create a new employee record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    /// Employee number.
    pub nik: String,
    /// Full name.
    pub name: String,
    /// Position code.
    pub position_code: String,
    /// Position name.
    pub position_name: String,
    /// Department name.
    pub department: String,
    /// Work email.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Date of joining.
    pub join_date: Option<NaiveDate>,
    /// Employment status; defaults to `active`.
    pub status: Option<EmployeeStatus>,
}

/// A partial last-write-wins update to an employee record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePatch {
    /// New employee number.
    pub nik: Option<String>,
    /// New name.
    pub name: Option<String>,
    /// New position code.
    pub position_code: Option<String>,
    /// New position name.
    pub position_name: Option<String>,
    /// New department name.
    pub department: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New join date.
    pub join_date: Option<NaiveDate>,
    /// New employment status.
    pub status: Option<EmployeeStatus>,
}
