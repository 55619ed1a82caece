//! Repository trait definitions
//!
//! These traits define the contract for data access, one per entity family.
//! Implementations live in the infrastructure layer. Signatures carry no
//! storage-technology detail: no query objects, no transaction handles.

use async_trait::async_trait;

use super::DomainError;
use super::entities::{Domain, Organisation, User};

/// Filter criteria for user queries
#[derive(Debug, Default, Clone)]
pub struct UserFilter {
    pub organisation_id: Option<i32>,
}

/// Filter criteria for domain queries
#[derive(Debug, Default, Clone)]
pub struct DomainFilter {
    pub organisation_id: Option<i32>,
}

/// Input for creating a user
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub organisation_id: Option<i32>,
}

impl CreateUserInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.username.trim().is_empty() {
            return Err(DomainError::Validation("username is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::Validation("email is required".to_string()));
        }
        Ok(())
    }
}

/// Input for partially updating a user
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub organisation_id: Option<Option<i32>>,
}

impl UpdateUserInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(username) = &self.username {
            if username.trim().is_empty() {
                return Err(DomainError::Validation(
                    "username cannot be empty".to_string(),
                ));
            }
        }
        if let Some(email) = &self.email {
            if email.trim().is_empty() {
                return Err(DomainError::Validation("email cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Input for creating an organisation
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateOrganisationInput {
    pub name: String,
    pub description: Option<String>,
}

impl CreateOrganisationInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }
        Ok(())
    }
}

/// Input for partially updating an organisation
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct UpdateOrganisationInput {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateOrganisationInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation("name cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Input for creating a domain
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateDomainInput {
    pub name: String,
    pub description: Option<String>,
    pub organisation_id: i32,
}

impl CreateDomainInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("name is required".to_string()));
        }
        Ok(())
    }
}

/// Input for partially updating a domain
#[derive(Debug, Default, Clone, serde::Deserialize)]
pub struct UpdateDomainInput {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl UpdateDomainInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::Validation("name cannot be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Repository trait for the User entity family
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by id; NotFound if absent
    async fn get(&self, id: i32) -> Result<User, DomainError>;

    /// List users in insertion order, optionally filtered by organisation
    async fn list(&self, filter: UserFilter) -> Result<Vec<User>, DomainError>;

    /// Create a user; Conflict if the username is already taken
    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError>;

    /// Apply partial changes to a user; NotFound if absent
    async fn update(&self, id: i32, changes: UpdateUserInput) -> Result<User, DomainError>;
}

/// Repository trait for the Organisation entity family
#[async_trait]
pub trait OrganisationRepository: Send + Sync {
    /// Get an organisation by id; NotFound if absent
    async fn get(&self, id: i32) -> Result<Organisation, DomainError>;

    /// List organisations in insertion order
    async fn list(&self) -> Result<Vec<Organisation>, DomainError>;

    /// Create an organisation; Conflict if the name is already taken
    async fn create(&self, input: CreateOrganisationInput) -> Result<Organisation, DomainError>;

    /// Apply partial changes to an organisation; NotFound if absent
    async fn update(
        &self,
        id: i32,
        changes: UpdateOrganisationInput,
    ) -> Result<Organisation, DomainError>;
}

/// Repository trait for the Domain entity family
#[async_trait]
pub trait DomainRepository: Send + Sync {
    /// Get a domain by id; NotFound if absent
    async fn get(&self, id: i32) -> Result<Domain, DomainError>;

    /// List domains in insertion order, optionally filtered by organisation
    async fn list(&self, filter: DomainFilter) -> Result<Vec<Domain>, DomainError>;

    /// Create a domain; Conflict if the organisation already has one by that name
    async fn create(&self, input: CreateDomainInput) -> Result<Domain, DomainError>;

    /// Apply partial changes to a domain; NotFound if absent
    async fn update(&self, id: i32, changes: UpdateDomainInput) -> Result<Domain, DomainError>;
}
