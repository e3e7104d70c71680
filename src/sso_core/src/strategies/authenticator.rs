use async_trait::async_trait;

use crate::{
    domain::{
        email::Email,
        ids::{AppId, UserId},
        password::Password,
        token::Token,
    },
    error::AuthError,
};

/// The operations the request gateway drives.
///
/// Inputs are already shape-validated; implementations report failures as
/// [`AuthError`] kinds and never panic on expected paths.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Register a new user and return the id the store assigned.
    async fn register_new_user(&self, email: Email, password: Password)
    -> Result<UserId, AuthError>;

    /// Verify credentials and issue a token for `app_id`.
    async fn login(
        &self,
        email: Email,
        password: Password,
        app_id: AppId,
    ) -> Result<Token, AuthError>;

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError>;
}
