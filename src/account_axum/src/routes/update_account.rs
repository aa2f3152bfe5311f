use account_application::AccountDetails;
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    error::ApiError, middleware::AuthenticatedUser, response::envelope, state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl From<UpdateAccountRequest> for AccountDetails {
    fn from(request: UpdateAccountRequest) -> Self {
        AccountDetails {
            full_name: request.full_name,
            email: request.email,
            username: request.username,
        }
    }
}

#[tracing::instrument(name = "Update account", skip_all)]
pub async fn update_account(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    body: Result<Json<UpdateAccountRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let user = state
        .accounts
        .update_account(&user.id, request.into())
        .await?;

    envelope(StatusCode::OK, "Account details updated", user)
}
