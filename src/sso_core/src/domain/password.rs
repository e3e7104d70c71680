use secrecy::{ExposeSecret, Secret};

use super::validation_error::ValidationError;

/// Shortest password accepted at registration, counted in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A plaintext password supplied by a caller.
///
/// `TryFrom` only checks presence, which is all login needs. New passwords
/// go through [`Password::parse_new`], which also enforces the minimum length.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse_new(value: Secret<String>) -> Result<Self, ValidationError> {
        let password = Self::try_from(value)?;

        if password.0.expose_secret().chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }

        Ok(password)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = ValidationError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(ValidationError::PasswordRequired);
        }

        Ok(Self(value))
    }
}
