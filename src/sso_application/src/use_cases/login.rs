use sso_core::{
    AppId, AppProvider, AppStoreError, AuthError, AuthErrorKind, Email, Password, PasswordHasher,
    PasswordHasherError, Token, TokenIssuer, UserProvider, UserSaver, UserStoreError,
};

use crate::AuthService;

pub const OP_LOGIN: &str = "auth.login";

impl<S, P, A, H, T> AuthService<S, P, A, H, T>
where
    S: UserSaver,
    P: UserProvider,
    A: AppProvider,
    H: PasswordHasher,
    T: TokenIssuer,
{
    /// Verify the credentials and issue a token for `app_id`.
    ///
    /// The steps run in order and the first failure wins: user lookup,
    /// password verification, application lookup, signing. An unknown email
    /// and a wrong password both yield `InvalidCredential`, and both cost one
    /// password verification.
    #[tracing::instrument(
        name = "AuthService::login",
        skip_all,
        fields(op = OP_LOGIN, app_id = %app_id)
    )]
    pub async fn login(
        &self,
        email: Email,
        password: Password,
        app_id: AppId,
    ) -> Result<Token, AuthError> {
        tracing::info!("attempting to login user");

        let user = match self.user_provider.user(&email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                tracing::warn!("user not found");
                // Result is irrelevant, the call only equalises timing.
                let _ = self
                    .password_hasher
                    .verify(self.password_hasher.dummy_hash(), &password)
                    .await;
                return Err(AuthError::new(OP_LOGIN, AuthErrorKind::InvalidCredential));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to get user");
                return Err(AuthError::internal(OP_LOGIN, e));
            }
        };

        match self
            .password_hasher
            .verify(user.password_hash(), &password)
            .await
        {
            Ok(()) => {}
            Err(PasswordHasherError::Mismatch) => {
                tracing::info!(user_id = %user.id(), "invalid credential");
                return Err(AuthError::new(OP_LOGIN, AuthErrorKind::InvalidCredential));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to verify password");
                return Err(AuthError::internal(OP_LOGIN, e));
            }
        }

        let app = self.app_provider.app(app_id).await.map_err(|e| match e {
            AppStoreError::AppNotFound => {
                tracing::warn!("app not found");
                AuthError::new(OP_LOGIN, AuthErrorKind::InvalidAppId)
            }
            e => {
                tracing::error!(error = %e, "failed to get app");
                AuthError::internal(OP_LOGIN, e)
            }
        })?;

        let token = self
            .token_issuer
            .issue(&user, &app, self.token_ttl)
            .map_err(|e| {
                tracing::error!(error = %e, "failed to generate token");
                AuthError::internal(OP_LOGIN, e)
            })?;

        tracing::info!(user_id = %user.id(), "user logged in successfully");
        Ok(token)
    }
}
