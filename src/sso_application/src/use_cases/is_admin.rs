use sso_core::{
    AppProvider, AuthError, AuthErrorKind, PasswordHasher, TokenIssuer, UserId, UserProvider,
    UserSaver, UserStoreError,
};

use crate::AuthService;

pub const OP_IS_ADMIN: &str = "auth.is_admin";

impl<S, P, A, H, T> AuthService<S, P, A, H, T>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
    H: PasswordHasher,
    T: TokenIssuer,
{
    /// Check if user is admin
    #[tracing::instrument(
        name = "AuthService::is_admin",
        skip_all,
        fields(op = OP_IS_ADMIN, user_id = %user_id)
    )]
    pub async fn is_admin(&self, user_id: UserId) -> Result<bool, AuthError> {
        tracing::info!("checking if user is admin");

        let is_admin = self
            .user_provider
            .is_admin(user_id)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => {
                    tracing::warn!("user not found");
                    AuthError::new(OP_IS_ADMIN, AuthErrorKind::UserNotFound)
                }
                e => {
                    tracing::error!(error = %e, "failed to check admin flag");
                    AuthError::internal(OP_IS_ADMIN, e)
                }
            })?;

        tracing::info!(is_admin, "checked if user is admin");
        Ok(is_admin)
    }
}
