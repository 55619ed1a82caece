pub mod domain_repository;
pub mod organisation_repository;
pub mod user_repository;

pub use domain_repository::SeaOrmDomainRepository;
pub use organisation_repository::SeaOrmOrganisationRepository;
pub use user_repository::SeaOrmUserRepository;
