use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::Deserialize;

use crate::{
    error::ApiError, middleware::AuthenticatedUser, response::envelope, state::AppState,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Option<Secret<String>>,
    pub new_password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Change password", skip_all)]
pub async fn change_password(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    body: Result<Json<ChangePasswordRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let blank = || Secret::new(String::new());

    state
        .accounts
        .change_password(
            &user.id,
            request.old_password.unwrap_or_else(blank),
            request.new_password.unwrap_or_else(blank),
        )
        .await?;

    envelope(StatusCode::OK, "Password changed successfully", ())
}
