//! In-memory repository doubles for use case tests.
//!
//! These enforce the same identity rules as the SeaORM implementations
//! (unique usernames, unique organisation names, one domain name per
//! organisation) so orchestration can be tested without a database.

use std::sync::Mutex;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;

use crate::domain::{
    CreateDomainInput, CreateOrganisationInput, CreateUserInput, Domain, DomainError,
    DomainFilter, DomainRepository, Organisation, OrganisationRepository, UpdateDomainInput,
    UpdateOrganisationInput, UpdateUserInput, User, UserFilter, UserRepository,
};

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_id: AtomicI32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get(&self, id: i32) -> Result<User, DomainError> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn list(&self, filter: UserFilter) -> Result<Vec<User>, DomainError> {
        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .filter(|u| match filter.organisation_id {
                Some(org_id) => u.organisation_id == Some(org_id),
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create(&self, input: CreateUserInput) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == input.username) {
            return Err(DomainError::Conflict(format!(
                "username '{}' already taken",
                input.username
            )));
        }

        let stamp = now();
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: input.username,
            email: input.email,
            organisation_id: input.organisation_id,
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, changes: UpdateUserInput) -> Result<User, DomainError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(username) = changes.username {
            user.username = username;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(organisation_id) = changes.organisation_id {
            user.organisation_id = organisation_id;
        }
        user.updated_at = now();

        Ok(user.clone())
    }
}

pub struct InMemoryOrganisationRepository {
    organisations: Mutex<Vec<Organisation>>,
    next_id: AtomicI32,
}

impl InMemoryOrganisationRepository {
    pub fn new() -> Self {
        Self {
            organisations: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    /// Insert an organisation directly, bypassing the use case layer.
    pub fn seed(&self, name: &str) -> Organisation {
        let stamp = now();
        let organisation = Organisation {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: name.to_string(),
            description: None,
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        self.organisations
            .lock()
            .unwrap()
            .push(organisation.clone());
        organisation
    }
}

#[async_trait]
impl OrganisationRepository for InMemoryOrganisationRepository {
    async fn get(&self, id: i32) -> Result<Organisation, DomainError> {
        self.organisations
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn list(&self) -> Result<Vec<Organisation>, DomainError> {
        Ok(self.organisations.lock().unwrap().clone())
    }

    async fn create(&self, input: CreateOrganisationInput) -> Result<Organisation, DomainError> {
        let mut organisations = self.organisations.lock().unwrap();
        if organisations.iter().any(|o| o.name == input.name) {
            return Err(DomainError::Conflict(format!(
                "organisation '{}' already exists",
                input.name
            )));
        }

        let stamp = now();
        let organisation = Organisation {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            description: input.description,
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        organisations.push(organisation.clone());
        Ok(organisation)
    }

    async fn update(
        &self,
        id: i32,
        changes: UpdateOrganisationInput,
    ) -> Result<Organisation, DomainError> {
        let mut organisations = self.organisations.lock().unwrap();
        let organisation = organisations
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(name) = changes.name {
            organisation.name = name;
        }
        if let Some(description) = changes.description {
            organisation.description = description;
        }
        organisation.updated_at = now();

        Ok(organisation.clone())
    }
}

pub struct InMemoryDomainRepository {
    domains: Mutex<Vec<Domain>>,
    next_id: AtomicI32,
}

impl InMemoryDomainRepository {
    pub fn new() -> Self {
        Self {
            domains: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

#[async_trait]
impl DomainRepository for InMemoryDomainRepository {
    async fn get(&self, id: i32) -> Result<Domain, DomainError> {
        self.domains
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    async fn list(&self, filter: DomainFilter) -> Result<Vec<Domain>, DomainError> {
        let domains = self.domains.lock().unwrap();
        Ok(domains
            .iter()
            .filter(|d| match filter.organisation_id {
                Some(org_id) => d.organisation_id == org_id,
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn create(&self, input: CreateDomainInput) -> Result<Domain, DomainError> {
        let mut domains = self.domains.lock().unwrap();
        if domains
            .iter()
            .any(|d| d.organisation_id == input.organisation_id && d.name == input.name)
        {
            return Err(DomainError::Conflict(format!(
                "domain '{}' already exists in organisation {}",
                input.name, input.organisation_id
            )));
        }

        let stamp = now();
        let domain = Domain {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: input.name,
            description: input.description,
            organisation_id: input.organisation_id,
            created_at: stamp.clone(),
            updated_at: stamp,
        };
        domains.push(domain.clone());
        Ok(domain)
    }

    async fn update(&self, id: i32, changes: UpdateDomainInput) -> Result<Domain, DomainError> {
        let mut domains = self.domains.lock().unwrap();
        let domain = domains
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(DomainError::NotFound)?;

        if let Some(name) = changes.name {
            domain.name = name;
        }
        if let Some(description) = changes.description {
            domain.description = description;
        }
        domain.updated_at = now();

        Ok(domain.clone())
    }
}
