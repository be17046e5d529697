//! Application state shared across all handlers.

use std::sync::Arc;

use orghub_core::config::AppConfig;
use orghub_service::{DepartmentService, EmployeeService, HierarchyService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Department CRUD and listing.
    pub department_service: Arc<DepartmentService>,
    /// Hierarchy resolution (paths, children, trees).
    pub hierarchy_service: Arc<HierarchyService>,
    /// Employee directory.
    pub employee_service: Arc<EmployeeService>,
}
