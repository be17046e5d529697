//! # orghub-store
//!
//! In-memory stores for the Orghub directory service. This crate fills the
//! persistence-layer slot: stores own their records exclusively, all
//! read-modify-write sequences run under a per-store write lock, and the
//! rest of the workspace only ever sees cloned snapshots.

pub mod audit;
pub mod department;
pub mod employee;
pub mod query;
pub mod seed;

pub use department::{DepartmentStore, DepartmentStoreOptions};
pub use employee::EmployeeStore;
pub use query::DepartmentListParams;
