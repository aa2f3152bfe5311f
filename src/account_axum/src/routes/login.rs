use account_application::LoginOutcome;
use account_core::PublicUser;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use crate::{cookies::with_session_cookies, error::ApiError, response::envelope, state::AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: PublicUser,
    pub access_token: String,
    pub refresh_token: String,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let password = request
        .password
        .unwrap_or_else(|| Secret::new(String::new()));

    let LoginOutcome { user, tokens } = state
        .accounts
        .login(request.username, request.email, password)
        .await?;

    let jar = with_session_cookies(jar, &state.cookies, &tokens);
    let body = LoginResponse {
        user,
        access_token: tokens.access_token.into_inner(),
        refresh_token: tokens.refresh_token.into_inner(),
    };

    Ok((
        jar,
        envelope(StatusCode::OK, "User logged in successfully", body)?,
    ))
}
