//! Domain use cases
//!
//! A domain describes a knowledge or format area and always belongs to an
//! organisation.

use std::sync::Arc;

use crate::domain::{
    CreateDomainInput, Domain, DomainError, DomainFilter, DomainRepository,
    OrganisationRepository, UpdateDomainInput,
};

/// List domains, optionally scoped to one organisation.
pub struct ListDomains {
    domains: Arc<dyn DomainRepository>,
}

impl ListDomains {
    pub fn new(domains: Arc<dyn DomainRepository>) -> Self {
        Self { domains }
    }

    pub async fn execute(&self, filter: DomainFilter) -> Result<Vec<Domain>, DomainError> {
        self.domains.list(filter).await
    }
}

/// Fetch a single domain by id.
pub struct GetDomain {
    domains: Arc<dyn DomainRepository>,
}

impl GetDomain {
    pub fn new(domains: Arc<dyn DomainRepository>) -> Self {
        Self { domains }
    }

    pub async fn execute(&self, id: i32) -> Result<Domain, DomainError> {
        self.domains.get(id).await
    }
}

/// Create a domain under an existing organisation. The organisation is
/// resolved first; nothing is written when the reference is dangling.
pub struct CreateDomain {
    domains: Arc<dyn DomainRepository>,
    organisations: Arc<dyn OrganisationRepository>,
}

impl CreateDomain {
    pub fn new(
        domains: Arc<dyn DomainRepository>,
        organisations: Arc<dyn OrganisationRepository>,
    ) -> Self {
        Self {
            domains,
            organisations,
        }
    }

    pub async fn execute(&self, input: CreateDomainInput) -> Result<Domain, DomainError> {
        input.validate()?;

        self.organisations.get(input.organisation_id).await?;

        self.domains.create(input).await
    }
}

/// Apply partial changes to an existing domain.
pub struct UpdateDomain {
    domains: Arc<dyn DomainRepository>,
}

impl UpdateDomain {
    pub fn new(domains: Arc<dyn DomainRepository>) -> Self {
        Self { domains }
    }

    pub async fn execute(&self, id: i32, changes: UpdateDomainInput) -> Result<Domain, DomainError> {
        changes.validate()?;

        self.domains.update(id, changes).await
    }
}
