//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{DomainRepository, OrganisationRepository, UserRepository};
use crate::infrastructure::{
    SeaOrmDomainRepository, SeaOrmOrganisationRepository, SeaOrmUserRepository,
};

/// Application state shared across all handlers.
///
/// Repositories are held behind trait objects so the concrete persistence
/// adapter is chosen here, at startup, and nowhere else.
#[derive(Clone)]
pub struct AppState {
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
    /// Organisation repository
    pub organisation_repo: Arc<dyn OrganisationRepository>,
    /// Domain repository
    pub domain_repo: Arc<dyn DomainRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(SeaOrmUserRepository::new(db.clone()));
        let organisation_repo = Arc::new(SeaOrmOrganisationRepository::new(db.clone()));
        let domain_repo = Arc::new(SeaOrmDomainRepository::new(db));

        Self {
            user_repo,
            organisation_repo,
            domain_repo,
        }
    }
}
