//! Organisation use cases
//!
//! Organisations are append-only in this core: there is no delete path.

use std::sync::Arc;

use crate::domain::{
    CreateOrganisationInput, DomainError, Organisation, OrganisationRepository,
    UpdateOrganisationInput,
};

/// List all organisations.
pub struct ListOrganisations {
    organisations: Arc<dyn OrganisationRepository>,
}

impl ListOrganisations {
    pub fn new(organisations: Arc<dyn OrganisationRepository>) -> Self {
        Self { organisations }
    }

    pub async fn execute(&self) -> Result<Vec<Organisation>, DomainError> {
        self.organisations.list().await
    }
}

/// Fetch a single organisation by id.
pub struct GetOrganisation {
    organisations: Arc<dyn OrganisationRepository>,
}

impl GetOrganisation {
    pub fn new(organisations: Arc<dyn OrganisationRepository>) -> Self {
        Self { organisations }
    }

    pub async fn execute(&self, id: i32) -> Result<Organisation, DomainError> {
        self.organisations.get(id).await
    }
}

/// Create an organisation.
pub struct CreateOrganisation {
    organisations: Arc<dyn OrganisationRepository>,
}

impl CreateOrganisation {
    pub fn new(organisations: Arc<dyn OrganisationRepository>) -> Self {
        Self { organisations }
    }

    pub async fn execute(
        &self,
        input: CreateOrganisationInput,
    ) -> Result<Organisation, DomainError> {
        input.validate()?;

        self.organisations.create(input).await
    }
}

/// Apply partial changes to an existing organisation.
pub struct UpdateOrganisation {
    organisations: Arc<dyn OrganisationRepository>,
}

impl UpdateOrganisation {
    pub fn new(organisations: Arc<dyn OrganisationRepository>) -> Self {
        Self { organisations }
    }

    pub async fn execute(
        &self,
        id: i32,
        changes: UpdateOrganisationInput,
    ) -> Result<Organisation, DomainError> {
        changes.validate()?;

        self.organisations.update(id, changes).await
    }
}
