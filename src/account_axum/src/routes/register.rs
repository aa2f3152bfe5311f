use account_application::Registration;
use account_core::MediaSlot;
use axum::{
    extract::{Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;

use crate::{error::ApiError, response::envelope, state::AppState, upload::UploadForm};

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let avatar_field = MediaSlot::Avatar.field_name();
    let cover_field = MediaSlot::CoverImage.field_name();

    let mut form =
        UploadForm::from_multipart(&mut multipart, &state.upload_dir, &[avatar_field, cover_field])
            .await?;

    let registration = Registration {
        full_name: form.take_text("fullName"),
        username: form.take_text("username"),
        email: form.take_text("email"),
        password: form.take_text("password").map(Secret::new),
        avatar: form.file(avatar_field),
        cover_image: form.file(cover_field),
    };

    let user = state.accounts.register(registration).await?;

    envelope(StatusCode::CREATED, "User registered successfully", user)
}
