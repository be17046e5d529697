//! Employee directory operations.

use std::sync::Arc;

use orghub_core::types::EmployeeId;
use orghub_core::{AppError, AppResult};
use orghub_entity::employee::{CreateEmployee, Employee, EmployeePatch};
use orghub_store::EmployeeStore;

/// Manages the flat employee directory.
///
/// Employees carry no tenant or version; the directory exists mainly so
/// departments have heads to reference.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    /// Employee store.
    store: Arc<EmployeeStore>,
}

impl EmployeeService {
    /// Creates a new employee service.
    pub fn new(store: Arc<EmployeeStore>) -> Self {
        Self { store }
    }

    /// Lists every employee, most recent first.
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.store.list().await)
    }

    /// Fetches an employee by ID.
    pub async fn get(&self, id: EmployeeId) -> AppResult<Employee> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Employee not found"))
    }

    /// Creates an employee record.
    pub async fn create(&self, input: CreateEmployee) -> AppResult<Employee> {
        self.store.create(input).await
    }

    /// Merges a last-write-wins patch into an employee record.
    pub async fn update(&self, id: EmployeeId, patch: EmployeePatch) -> AppResult<Employee> {
        self.store.update(id, patch).await
    }

    /// Deletes an employee record permanently.
    pub async fn delete(&self, id: EmployeeId) -> AppResult<()> {
        self.store.delete(id).await
    }
}
