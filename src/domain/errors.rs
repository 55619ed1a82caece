//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! Every repository and use case speaks this vocabulary; storage error types
//! never cross the repository boundary.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Input failed required-field or shape checks
    Validation(String),
    /// Entity (or a referenced entity) does not exist
    NotFound,
    /// Uniqueness constraint violated on create
    Conflict(String),
    /// Backing store unreachable, timed out, or otherwise failed
    Unavailable(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            DomainError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in infrastructure layer).
// Constraint violations are classified first so that concurrent creates
// racing on the same identity surface as Conflict, not Unavailable.
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        use sea_orm::{DbErr, SqlErr};

        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => DomainError::NotFound,
            _ => match e {
                DbErr::Conn(err) => DomainError::Unavailable(err.to_string()),
                DbErr::ConnectionAcquire(err) => DomainError::Unavailable(err.to_string()),
                other => DomainError::Unavailable(other.to_string()),
            },
        }
    }
}
