//! Infrastructure layer - External systems integration
//!
//! This module handles the external system concerns of the service:
//! the database connection, the users repository and schema migrations.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
