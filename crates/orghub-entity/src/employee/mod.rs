//! Employee entity: model and status.

pub mod model;
pub mod status;

pub use model::{CreateEmployee, Employee, EmployeePatch};
pub use status::EmployeeStatus;
