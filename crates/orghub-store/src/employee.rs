//! In-memory employee store.
//!
//! Employees are a plain directory: no version counter, no audit trail,
//! last-write-wins updates, hard deletes.

use tokio::sync::RwLock;
use tracing::info;

use orghub_core::types::EmployeeId;
use orghub_core::{AppError, AppResult};
use orghub_entity::employee::{CreateEmployee, Employee, EmployeePatch};

/// In-memory collection of employee records.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    rows: RwLock<Vec<Employee>>,
}

impl EmployeeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record, most recent first.
    pub async fn list(&self) -> Vec<Employee> {
        self.rows.read().await.clone()
    }

    /// Fetch an employee by ID.
    pub async fn get_by_id(&self, id: EmployeeId) -> AppResult<Option<Employee>> {
        Ok(self.rows.read().await.iter().find(|e| e.id == id).cloned())
    }

    /// Create an employee record.
    pub async fn create(&self, input: CreateEmployee) -> AppResult<Employee> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("Employee name is required"));
        }
        if input.nik.trim().is_empty() {
            return Err(AppError::validation("Employee number is required"));
        }

        let employee = Employee {
            id: EmployeeId::new(),
            nik: input.nik,
            name: input.name,
            position_code: input.position_code,
            position_name: input.position_name,
            department: input.department,
            email: input.email,
            phone: input.phone,
            join_date: input.join_date,
            status: input.status.unwrap_or_default(),
        };

        let mut rows = self.rows.write().await;
        rows.insert(0, employee.clone());
        info!(employee_id = %employee.id, nik = %employee.nik, "Employee created");
        Ok(employee)
    }

    /// Merge a patch into an employee record, last writer wins.
    pub async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> AppResult<Employee> {
        let mut rows = self.rows.write().await;
        let employee = rows
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("Employee not found"))?;

        if let Some(nik) = patch.nik {
            employee.nik = nik;
        }
        if let Some(name) = patch.name {
            employee.name = name;
        }
        if let Some(position_code) = patch.position_code {
            employee.position_code = position_code;
        }
        if let Some(position_name) = patch.position_name {
            employee.position_name = position_name;
        }
        if let Some(department) = patch.department {
            employee.department = department;
        }
        if let Some(email) = patch.email {
            employee.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            employee.phone = Some(phone);
        }
        if let Some(join_date) = patch.join_date {
            employee.join_date = Some(join_date);
        }
        if let Some(status) = patch.status {
            employee.status = status;
        }

        info!(employee_id = %id, "Employee updated");
        Ok(employee.clone())
    }

    /// Remove an employee record permanently.
    pub async fn delete(&self, id: EmployeeId) -> AppResult<()> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(AppError::not_found("Employee not found"));
        }
        info!(employee_id = %id, "Employee deleted");
        Ok(())
    }
}
