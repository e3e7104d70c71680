use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sso_core::{Authenticator, Email, Password};

use super::or_empty;
use crate::http::{ApiError, Gateway};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user_id: i64,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<A>(
    State(gateway): State<Gateway<A>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    A: Authenticator + 'static,
{
    let Json(request) = payload?;
    let email = Email::try_from(or_empty(request.email))?;
    let password = Password::parse_new(or_empty(request.password))?;

    let user_id = gateway
        .with_deadline(gateway.authenticator().register_new_user(email, password))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user_id: user_id.as_i64(),
        }),
    ))
}
