use thiserror::Error;

/// Shape errors raised while parsing untrusted input into domain types.
///
/// The messages are caller-visible, so they never echo the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("email is required")]
    EmailRequired,
    #[error("email is invalid")]
    InvalidEmail,
    #[error("password is required")]
    PasswordRequired,
    #[error("password is required min 8 symbols")]
    PasswordTooShort,
    #[error("app_id is required")]
    AppIdRequired,
    #[error("user_id is required")]
    UserIdRequired,
}
