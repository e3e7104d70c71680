use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    app::App, password::Password, password_hash::PasswordHash, token::Token, user::User,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Password does not match")]
    Mismatch,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for salted, deliberately slow password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Constant-time check of `candidate` against `expected`.
    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError>;

    /// A hash of no real password, produced with the same parameters as
    /// real hashes. Verifying against it costs as much as a real check.
    fn dummy_hash(&self) -> &PasswordHash;
}

#[derive(Debug, Error)]
pub enum TokenIssuerError {
    #[error("Signing secret is empty")]
    EmptySecret,
    #[error("Token TTL is out of range")]
    InvalidTtl,
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Port trait for issuing signed, tenant-scoped tokens
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user: &User, app: &App, ttl: Duration) -> Result<Token, TokenIssuerError>;
}
