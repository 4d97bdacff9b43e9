//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// The id is assigned by the credential store on insert and never changes.
/// Emails are unique across all users and serve as the lookup key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Create a user from its stored fields
    pub fn new(id: i64, name: String, email: String, password_hash: String) -> Self {
        Self {
            id,
            name,
            email,
            password_hash,
        }
    }
}

/// Registration response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RegisterResponse {
    /// Human-readable confirmation
    #[schema(example = "User registered successfully.")]
    pub message: String,
    /// Identifier assigned by the store
    #[serde(rename = "userId")]
    #[schema(example = 1)]
    pub user_id: i64,
}

impl RegisterResponse {
    pub fn new(user_id: i64) -> Self {
        Self {
            message: "User registered successfully.".to_string(),
            user_id,
        }
    }
}
