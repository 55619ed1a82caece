pub mod domain;
pub mod organisation;
pub mod user;
