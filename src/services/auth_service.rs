//! Authentication service - registration and login orchestration.
//!
//! Runs each flow's steps in sequence and short-circuits on the first
//! failure; the routing layer maps the typed outcome to a status code.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{validate_registration, Password, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

use super::token_issuer::{Claims, TokenIssuer};

/// Authentication operations exposed to the routing layer.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user, returning it with the store-assigned id.
    /// No token is issued on registration; the caller logs in separately.
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Authenticate a user and return a signed bearer token.
    async fn login(&self, email: String, password: String) -> AppResult<String>;

    /// Verify a previously issued token and extract its claims.
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation orchestrating validation, the credential store,
/// password hashing and token issuance.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
    request_timeout: Duration,
}

impl Authenticator {
    /// Create a new auth service over the given store and issuer
    pub fn new(
        users: Arc<dyn UserRepository>,
        tokens: TokenIssuer,
        request_timeout: Duration,
    ) -> Self {
        Self {
            users,
            tokens,
            request_timeout,
        }
    }

    /// Bound store round-trips and hashing work with the request-scoped
    /// timeout; expiry surfaces as a 503-class failure instead of hanging.
    async fn bounded<T>(
        &self,
        fut: impl std::future::Future<Output = AppResult<T>> + Send,
    ) -> AppResult<T> {
        tokio::time::timeout(self.request_timeout, fut)
            .await
            .map_err(|_| AppError::Timeout)?
    }
}

/// Hash on the blocking pool; bcrypt is deliberately slow and must not
/// stall the async accept loop.
async fn hash_password(plain: String) -> AppResult<String> {
    tokio::task::spawn_blocking(move || Password::new(&plain).map(Password::into_string))
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
}

async fn verify_password(stored: Password, plain: String) -> AppResult<bool> {
    tokio::task::spawn_blocking(move || Ok(stored.verify(&plain)))
        .await
        .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))?
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        validate_registration(&name, &email, &password)?;

        // Fast path: skip the hashing cost for known duplicates. The unique
        // index on email remains the authoritative signal if two
        // registrations race past this check.
        if self
            .bounded(self.users.find_by_email(&email))
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEmail);
        }

        let password_hash = self.bounded(hash_password(password)).await?;
        self.bounded(self.users.create(name, email, password_hash))
            .await
    }

    async fn login(&self, email: String, password: String) -> AppResult<String> {
        // Unknown email short-circuits before any hashing work
        let user = self
            .bounded(self.users.find_by_email(&email))
            .await?
            .ok_or(AppError::UserNotFound)?;

        let stored = Password::from_hash(user.password_hash.clone());
        if !self.bounded(verify_password(stored, password)).await? {
            return Err(AppError::InvalidCredentials);
        }

        self.tokens.issue(user.id)
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}
