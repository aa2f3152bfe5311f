use axum::{Extension, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    error::ApiError, middleware::AuthenticatedUser, response::envelope, state::AppState,
};

#[tracing::instrument(name = "Current user", skip_all)]
pub async fn current_user(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, ApiError> {
    let user = state.accounts.current_user(&user.id).await?;

    envelope(StatusCode::OK, "Current user found", user)
}
