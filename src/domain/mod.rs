//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies (no SeaORM, no Axum).
//! Entities, trait definitions and domain error types only.

pub mod entities;
pub mod errors;
pub mod repositories;

pub use entities::{Domain, Organisation, User};
pub use errors::DomainError;
pub use repositories::*;
