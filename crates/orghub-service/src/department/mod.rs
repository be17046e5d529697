//! Department business logic: CRUD, listing, and hierarchy resolution.

pub mod hierarchy;
pub mod service;

pub use hierarchy::HierarchyService;
pub use service::DepartmentService;
