use std::time::Duration;

use async_trait::async_trait;
use sso_core::{
    AppId, AppProvider, AuthError, Authenticator, Email, Password, PasswordHasher, Token,
    TokenIssuer, UserId, UserProvider, UserSaver,
};

/// The auth domain service: registration, login and admin lookup.
///
/// Holds no mutable state of its own. Everything it owns is fixed at
/// construction, so a single instance can be shared behind an `Arc` and
/// driven from any number of concurrent requests.
pub struct AuthService<S, P, A, H, T>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub(crate) user_saver: S,
    pub(crate) user_provider: P,
    pub(crate) app_provider: A,
    pub(crate) password_hasher: H,
    pub(crate) token_issuer: T,
    pub(crate) token_ttl: Duration,
}

impl<S, P, A, H, T> AuthService<S, P, A, H, T>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
    H: PasswordHasher,
    T: TokenIssuer,
{
    /// Create a new AuthService
    ///
    /// # Arguments
    /// * `user_saver` - Creates users, enforcing email uniqueness
    /// * `user_provider` - Looks users up by email and id
    /// * `app_provider` - Resolves applications (tenants) by id
    /// * `password_hasher` - Hashes and verifies passwords
    /// * `token_issuer` - Signs tokens with the tenant secret
    /// * `token_ttl` - Lifetime of every issued token
    pub fn new(
        user_saver: S,
        user_provider: P,
        app_provider: A,
        password_hasher: H,
        token_issuer: T,
        token_ttl: Duration,
    ) -> Self {
        Self {
            user_saver,
            user_provider,
            app_provider,
            password_hasher,
            token_issuer,
            token_ttl,
        }
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

#[async_trait]
impl<S, P, A, H, T> Authenticator for AuthService<S, P, A, H, T>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
    H: PasswordHasher,
    T: TokenIssuer,
{
    async fn register_new_user(
        &self,
        email: Email,
        password: Password,
    ) -> Result<UserId, AuthError> {
        AuthService::register_new_user(self, email, password).await
    }

    async fn login(
        &self,
        email: Email,
        password: Password,
        app_id: AppId,
    ) -> Result<Token, AuthError> {
        AuthService::login(self, email, password, app_id).await
    }

    async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        AuthService::is_admin(self, user_id).await
    }
}
