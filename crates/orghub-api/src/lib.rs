//! # orghub-api
//!
//! HTTP API layer for the Orghub directory service built on Axum.
//!
//! Provides the REST endpoints, DTOs, error mapping, and router assembly.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
