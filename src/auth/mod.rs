use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config;

/// Fixed subject marker carried by every issued token.
pub const TOKEN_SUBJECT: &str = "session";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(username: String) -> Self {
        let now = Utc::now();
        let expiry_secs = config::config().security.jwt_expiry_secs;
        let exp = (now + Duration::seconds(expiry_secs as i64)).timestamp();

        Self {
            sub: TOKEN_SUBJECT.to_string(),
            username,
            exp,
            iat: now.timestamp(),
        }
    }
}

#[derive(Debug)]
pub enum JwtError {
    TokenGeneration(String),
    InvalidSecret,
}

impl std::fmt::Display for JwtError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JwtError::TokenGeneration(msg) => write!(f, "JWT generation error: {}", msg),
            JwtError::InvalidSecret => write!(f, "Invalid JWT secret"),
        }
    }
}

impl std::error::Error for JwtError {}

pub fn generate_jwt(claims: Claims) -> Result<String, JwtError> {
    let secret = &config::config().security.jwt_secret;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::default();

    encode(&header, &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{decode, DecodingKey, Validation};

    #[test]
    fn claims_carry_subject_and_expiry_window() {
        let claims = Claims::new("admin".to_string());
        assert_eq!(claims.sub, TOKEN_SUBJECT);
        assert_eq!(claims.username, "admin");
        assert!(claims.exp > claims.iat);
        let window = claims.exp - claims.iat;
        assert_eq!(window as u64, config::config().security.jwt_expiry_secs);
    }

    #[test]
    fn generated_token_round_trips_with_configured_secret() {
        let token = generate_jwt(Claims::new("admin".to_string())).expect("token");

        let secret = &config::config().security.jwt_secret;
        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .expect("decode");

        assert_eq!(decoded.claims.sub, TOKEN_SUBJECT);
        assert_eq!(decoded.claims.username, "admin");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_jwt(Claims::new("admin".to_string())).expect("token");

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"some-other-secret"),
            &Validation::default(),
        );
        assert!(result.is_err());
    }
}
