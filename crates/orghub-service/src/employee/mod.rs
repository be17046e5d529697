//! Employee directory business logic.

pub mod service;

pub use service::EmployeeService;
