use account_core::MediaSlot;
use axum::{
    Extension,
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    error::ApiError, middleware::AuthenticatedUser, response::envelope, state::AppState,
    upload::UploadForm,
};

#[tracing::instrument(name = "Update avatar", skip_all)]
pub async fn update_avatar(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let field = MediaSlot::Avatar.field_name();
    let form = UploadForm::from_multipart(&mut multipart, &state.upload_dir, &[field]).await?;

    let user = state
        .accounts
        .update_avatar(&user.id, form.file(field))
        .await?;

    envelope(StatusCode::OK, "File updated successfully", user)
}

#[tracing::instrument(name = "Update cover image", skip_all)]
pub async fn update_cover_image(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let field = MediaSlot::CoverImage.field_name();
    let form = UploadForm::from_multipart(&mut multipart, &state.upload_dir, &[field]).await?;

    let user = state
        .accounts
        .update_cover_image(&user.id, form.file(field))
        .await?;

    envelope(StatusCode::OK, "File updated successfully", user)
}
