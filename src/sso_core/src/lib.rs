pub mod domain;
pub mod error;
pub mod ports;
pub mod strategies;

// Re-export commonly used types for convenience
pub use domain::{
    app::App,
    email::Email,
    ids::{AppId, UserId},
    password::{MIN_PASSWORD_LENGTH, Password},
    password_hash::PasswordHash,
    token::Token,
    user::User,
    validation_error::ValidationError,
};

pub use error::{AuthError, AuthErrorKind, BoxError};

pub use ports::{
    repositories::{AppProvider, AppStoreError, UserProvider, UserSaver, UserStoreError},
    services::{PasswordHasher, PasswordHasherError, TokenIssuer, TokenIssuerError},
};

pub use strategies::authenticator::Authenticator;
