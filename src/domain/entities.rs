//! The logical entities of the Knowledge Service core.
//!
//! Plain value types with no persistence or transport dependencies.
//! Ids are storage-assigned and immutable after creation; mapping to and
//! from storage rows lives in the infrastructure layer.

use serde::Serialize;

/// A user account. Belongs to zero or one organisation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub organisation_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

/// An organisation owning users and domains. Append-only: no delete path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organisation {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// A knowledge or format area an organisation holds expertise in.
/// Cannot exist without a valid organisation reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Domain {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub organisation_id: i32,
    pub created_at: String,
    pub updated_at: String,
}
