use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    app::App,
    email::Email,
    ids::{AppId, UserId},
    password_hash::PasswordHash,
    user::User,
};

// User store port traits and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Creates users. Email uniqueness is enforced here, not by callers.
#[async_trait]
pub trait UserSaver: Send + Sync {
    async fn save_user(
        &self,
        email: &Email,
        password_hash: &PasswordHash,
    ) -> Result<UserId, UserStoreError>;
}

#[async_trait]
pub trait UserProvider: Send + Sync {
    async fn user(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn is_admin(&self, user_id: UserId) -> Result<bool, UserStoreError>;
}

// App store port trait and errors
#[derive(Debug, Error)]
pub enum AppStoreError {
    #[error("App not found")]
    AppNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AppStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AppNotFound, Self::AppNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait AppProvider: Send + Sync {
    async fn app(&self, app_id: AppId) -> Result<App, AppStoreError>;
}
