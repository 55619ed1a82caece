//! Use cases - one struct per business operation
//!
//! Each use case orchestrates calls against the repository traits and
//! returns domain entities or a `DomainError`. Use cases validate input
//! shape, invoke exactly the repository operations they need, and never
//! call one another. They hold repository seams only; no storage or
//! transport types appear here.

pub mod domain;
pub mod organisation;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::{CreateDomain, GetDomain, ListDomains, UpdateDomain};
pub use organisation::{CreateOrganisation, GetOrganisation, ListOrganisations, UpdateOrganisation};
pub use user::{CreateUser, GetUser, ListUsers, UpdateUser};
