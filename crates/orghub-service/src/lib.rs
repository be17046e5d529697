//! # orghub-service
//!
//! Business logic for the Orghub directory service. Services sit between
//! the HTTP layer and the stores: they apply tenant scoping, page-size
//! clamping, and hierarchy resolution, and decide what each caller is
//! allowed to see.

pub mod context;
pub mod department;
pub mod employee;

pub use context::RequestContext;
pub use department::hierarchy::HierarchyService;
pub use department::service::DepartmentService;
pub use employee::service::EmployeeService;
