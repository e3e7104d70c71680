use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use sso_core::{AppId, Authenticator, Email, Password};

use super::or_empty;
use crate::http::{ApiError, Gateway};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub app_id: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[tracing::instrument(name = "Login", skip_all, fields(app_id))]
pub async fn login<A>(
    State(gateway): State<Gateway<A>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    A: Authenticator + 'static,
{
    let Json(request) = payload?;
    tracing::Span::current().record("app_id", request.app_id);

    let email = Email::try_from(or_empty(request.email))?;
    let password = Password::try_from(or_empty(request.password))?;
    let app_id = AppId::parse(request.app_id)?;

    let token = gateway
        .with_deadline(gateway.authenticator().login(email, password, app_id))
        .await?;

    Ok(Json(LoginResponse {
        token: token.into_inner(),
    }))
}
