//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Only the service trait, its DTO types, and domain error types.

pub mod errors;
pub mod service;

pub use errors::DomainError;
pub use service::*;
