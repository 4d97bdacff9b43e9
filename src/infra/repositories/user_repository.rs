//! User repository - the credential store contract.
//!
//! The service layer depends on the `UserRepository` trait; `UserStore` is
//! the SeaORM-backed implementation against the users table.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::user::{self, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// Credential store operations needed by the auth flows.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by email (the unique lookup key)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Insert a new user and return it with the store-assigned id.
    ///
    /// A unique-constraint violation on email is reported as
    /// `AppError::DuplicateEmail`; the index is the authoritative duplicate
    /// signal even when two registrations race past the existence check.
    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User>;
}

/// SeaORM-backed user store
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a new store over the given connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, name: String, email: String, password_hash: String) -> AppResult<User> {
        let active_model = user::ActiveModel {
            name: Set(name),
            email: Set(email),
            password: Set(password_hash),
            ..Default::default()
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::DuplicateEmail)
            }
            Err(e) => Err(AppError::from(e)),
        }
    }
}
