//! # orghub-entity
//!
//! Domain entity models for the Orghub directory service. Every struct in
//! this crate represents a stored record or a domain value object. All
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`, and
//! serialize with camelCase field names to match the HTTP wire format.

pub mod department;
pub mod employee;
