use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use sso_core::{AuthError, AuthErrorKind, ValidationError};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Caller-visible failures. Messages are short and never carry the
/// underlying storage or crypto detail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(ValidationError),

    #[error("malformed request body")]
    MalformedBody,

    #[error("invalid email or password")]
    InvalidCredential,

    #[error("invalid app_id")]
    InvalidAppId,

    #[error("user already exists")]
    UserAlreadyExists,

    #[error("user not found")]
    UserNotFound,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    #[error("internal error")]
    UnexpectedError,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_)
            | ApiError::MalformedBody
            | ApiError::InvalidCredential
            | ApiError::InvalidAppId => StatusCode::BAD_REQUEST,
            ApiError::UserAlreadyExists => StatusCode::CONFLICT,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,
            ApiError::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
            ApiError::UnexpectedError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (self.status_code(), body).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        ApiError::InvalidInput(error)
    }
}

// The rejection text names serde internals, so it is logged rather than returned.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(rejection = %rejection.body_text(), "malformed request body");
        ApiError::MalformedBody
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error.kind() {
            AuthErrorKind::InvalidCredential => ApiError::InvalidCredential,
            AuthErrorKind::InvalidAppId => ApiError::InvalidAppId,
            AuthErrorKind::UserAlreadyExists => ApiError::UserAlreadyExists,
            AuthErrorKind::UserNotFound => ApiError::UserNotFound,
            AuthErrorKind::Internal => {
                tracing::error!(error = ?error, "internal error");
                ApiError::UnexpectedError
            }
        }
    }
}
