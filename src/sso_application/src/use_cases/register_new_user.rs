use sso_core::{
    AppProvider, AuthError, AuthErrorKind, Email, Password, PasswordHasher, TokenIssuer, UserId,
    UserProvider, UserSaver, UserStoreError,
};

use crate::AuthService;

pub const OP_REGISTER_NEW_USER: &str = "auth.register_new_user";

impl<S, P, A, H, T> AuthService<S, P, A, H, T>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
    H: PasswordHasher,
    T: TokenIssuer,
{
    /// Register a new user and return the id assigned by the store.
    ///
    /// Only the password hash reaches the store. A second registration with
    /// the same email fails with `UserAlreadyExists`; nothing is overwritten.
    #[tracing::instrument(
        name = "AuthService::register_new_user",
        skip_all,
        fields(op = OP_REGISTER_NEW_USER)
    )]
    pub async fn register_new_user(
        &self,
        email: Email,
        password: Password,
    ) -> Result<UserId, AuthError> {
        tracing::info!("registering user");

        let password_hash = self.password_hasher.hash(&password).await.map_err(|e| {
            tracing::error!(error = %e, "failed to generate password hash");
            AuthError::internal(OP_REGISTER_NEW_USER, e)
        })?;

        let user_id = self
            .user_saver
            .save_user(&email, &password_hash)
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => {
                    tracing::warn!("user already exists");
                    AuthError::new(OP_REGISTER_NEW_USER, AuthErrorKind::UserAlreadyExists)
                }
                e => {
                    tracing::error!(error = %e, "failed to save user");
                    AuthError::internal(OP_REGISTER_NEW_USER, e)
                }
            })?;

        tracing::info!(user_id = %user_id, "user registered");
        Ok(user_id)
    }
}
