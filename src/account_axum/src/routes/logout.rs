use axum::{Extension, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;

use crate::{
    cookies::without_session_cookies, error::ApiError, middleware::AuthenticatedUser,
    response::envelope, state::AppState,
};

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(user)): Extension<AuthenticatedUser>,
    jar: CookieJar,
) -> Result<impl IntoResponse, ApiError> {
    state.accounts.logout(&user.id).await?;

    let jar = without_session_cookies(jar, &state.cookies);

    Ok((jar, envelope(StatusCode::OK, "Logout successfully!", ())?))
}
