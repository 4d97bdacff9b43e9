//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::extractors::ApiJson;
use crate::api::AppState;
use crate::domain::RegisterResponse;
use crate::errors::AppResult;

/// User registration request.
///
/// Fields default to empty strings so that absent keys reach the validator
/// as missing fields instead of failing deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[serde(default)]
    #[schema(example = "Ann")]
    pub name: String,
    /// User email address
    #[serde(default)]
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// User password (minimum 6 characters)
    #[serde(default)]
    #[schema(example = "secret1", min_length = 6)]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[serde(default)]
    #[schema(example = "ann@x.com")]
    pub email: String,
    /// User password
    #[serde(default)]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Login response carrying the bearer token
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful.")]
    pub message: String,
    /// Signed JWT, valid for one hour
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation error or email already in use")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let user = state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse::new(user.id))))
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 404, description = "User not found")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful.".to_string(),
        token,
    }))
}
