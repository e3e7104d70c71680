use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use sso_core::{Authenticator, UserId};

use crate::http::{ApiError, Gateway};

#[derive(Debug, Deserialize)]
pub struct IsAdminRequest {
    #[serde(default)]
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IsAdminResponse {
    pub is_admin: bool,
}

#[tracing::instrument(name = "Is Admin", skip_all, fields(user_id))]
pub async fn is_admin<A>(
    State(gateway): State<Gateway<A>>,
    payload: Result<Json<IsAdminRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
    A: Authenticator + 'static,
{
    let Json(request) = payload?;
    tracing::Span::current().record("user_id", request.user_id);

    let user_id = UserId::parse(request.user_id)?;

    let is_admin = gateway
        .with_deadline(gateway.authenticator().is_admin(user_id))
        .await?;

    Ok(Json(IsAdminResponse { is_admin }))
}
