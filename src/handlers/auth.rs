use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
    pub expires_in: u64,
}

/// POST /auth/login - authenticate and receive a JWT for the protected routes.
///
/// Credentials are checked against the configured in-process pair, not the
/// store. The failure message does not reveal which field was wrong.
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<TokenResponse>, ApiError> {
    let security = &config::config().security;

    // An unconfigured credential pair admits nobody
    let configured = !security.auth_username.is_empty() && !security.auth_password.is_empty();
    let matches = configured
        && payload.username == security.auth_username
        && payload.password == security.auth_password;

    if !matches {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let token = generate_jwt(Claims::new(payload.username)).map_err(|e| {
        tracing::error!("Token generation failed: {}", e);
        ApiError::internal_server_error("Failed to issue token")
    })?;

    Ok(Json(TokenResponse {
        token,
        expires_in: security.jwt_expiry_secs,
    }))
}
