use argon2::{
    Algorithm, Argon2, Params, PasswordHash as PhcHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use sso_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};

use crate::config::HashingSettings;

// Hashed once at startup to back login attempts for unknown emails.
const DUMMY_PASSWORD: &str = "dummy password for unknown users";

/// Argon2id password hasher. Hashing runs on the blocking thread pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
    dummy_hash: PasswordHash,
}

impl Argon2PasswordHasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, PasswordHasherError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

        let dummy_hash = hash_with(&params, DUMMY_PASSWORD.as_bytes())?;

        Ok(Self { params, dummy_hash })
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let params = self.params.clone();
        let password = password.clone();

        tokio::task::spawn_blocking(move || {
            current_span
                .in_scope(|| hash_with(&params, password.as_ref().expose_secret().as_bytes()))
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        expected: &PasswordHash,
        candidate: &Password,
    ) -> Result<(), PasswordHasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let expected = expected.clone();
        let candidate = candidate.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash = PhcHash::new(expected.as_str())
                    .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?;

                // Parameters are read back from the PHC string, so hashes made
                // with older settings keep verifying.
                Argon2::default()
                    .verify_password(
                        candidate.as_ref().expose_secret().as_bytes(),
                        &expected_hash,
                    )
                    .map_err(|e| match e {
                        password_hash::Error::Password => PasswordHasherError::Mismatch,
                        e => PasswordHasherError::UnexpectedError(e.to_string()),
                    })
            })
        })
        .await
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))?
    }

    fn dummy_hash(&self) -> &PasswordHash {
        &self.dummy_hash
    }
}

fn hash_with(params: &Params, password: &[u8]) -> Result<PasswordHash, PasswordHasherError> {
    let salt = SaltString::generate(&mut rand_core::OsRng);
    let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, params.clone());

    hasher
        .hash_password(password, &salt)
        .map(|h| PasswordHash::new(Secret::from(h.to_string())))
        .map_err(|e| PasswordHasherError::UnexpectedError(e.to_string()))
}
