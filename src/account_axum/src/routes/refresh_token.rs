use account_core::AccountError;
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    cookies::{with_session_cookies, without_session_cookies},
    error::ApiError,
    response::envelope,
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Rotates the session. The refresh token comes from its cookie or, failing
/// that, from an optional JSON body. Any failure clears both cookies.
#[tracing::instrument(name = "Refresh access token", skip_all)]
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, (CookieJar, ApiError)> {
    let body = match body {
        Ok(body) => body,
        Err(e) => return Err((without_session_cookies(jar, &state.cookies), e.into())),
    };
    let presented = match presented_token(&jar, &state.cookies.refresh, &body) {
        Ok(token) => token,
        Err(e) => return Err((without_session_cookies(jar, &state.cookies), e.into())),
    };

    let tokens = match state.accounts.refresh_access(presented).await {
        Ok(tokens) => tokens,
        Err(e) => return Err((without_session_cookies(jar, &state.cookies), e.into())),
    };

    let jar = with_session_cookies(jar, &state.cookies, &tokens);
    let response = RefreshResponse {
        access_token: tokens.access_token.into_inner(),
        refresh_token: tokens.refresh_token.into_inner(),
    };

    match envelope(StatusCode::OK, "Access token renewed", response) {
        Ok(envelope) => Ok((jar, envelope)),
        Err(e) => Err((without_session_cookies(jar, &state.cookies), e)),
    }
}

fn presented_token(
    jar: &CookieJar,
    cookie_name: &str,
    body: &[u8],
) -> Result<Option<String>, AccountError> {
    if let Some(cookie) = jar.get(cookie_name).filter(|c| !c.value().is_empty()) {
        return Ok(Some(cookie.value().to_owned()));
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let request: RefreshRequest = serde_json::from_slice(body)
        .map_err(|e| AccountError::validation(format!("Invalid request body: {e}")))?;
    Ok(request.refresh_token)
}
