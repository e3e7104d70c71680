use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use sso_core::{App, Token, TokenIssuer, TokenIssuerError, User};
use thiserror::Error;

/// Claims carried by every issued token, scoped to one application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub uid: i64,
    pub email: String,
    pub app_id: i32,
    pub exp: i64,
}

/// Issues HS256 JWTs signed with the secret of the application they are for.
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtTokenIssuer;

impl JwtTokenIssuer {
    pub fn new() -> Self {
        Self
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<Token, TokenIssuerError> {
        generate_token(user, app, ttl).map(Token::new)
    }
}

// Create JWT token for `user`, valid for `ttl` and signed with the app secret
pub fn generate_token(user: &User, app: &App, ttl: Duration) -> Result<String, TokenIssuerError> {
    let secret = app.secret_bytes();
    if secret.is_empty() {
        return Err(TokenIssuerError::EmptySecret);
    }

    let delta = chrono::Duration::from_std(ttl).map_err(|_| TokenIssuerError::InvalidTtl)?;

    // Create JWT expiration time
    let exp = Utc::now()
        .checked_add_signed(delta)
        .ok_or(TokenIssuerError::InvalidTtl)?
        .timestamp();

    let claims = Claims {
        uid: user.id().as_i64(),
        email: user.email().as_str().to_owned(),
        app_id: app.id().as_i32(),
        exp,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenIssuerError::SigningFailed(e.to_string()))
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token error: {0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Decode `token` and check its signature against the application secret
/// and its expiration against the current time.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)?;
    Ok(data.claims)
}
