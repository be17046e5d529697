//! HTTP request handlers, organized by domain.

pub mod department;
pub mod employee;
pub mod health;
