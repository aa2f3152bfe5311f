use account_core::{AuthValidator, PublicUser};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::ApiError, state::AppState};

/// The caller resolved by [`require_auth`], available to handlers as an
/// `Extension`.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub PublicUser);

/// Rejects the request with 401 unless it carries a valid access token for
/// an existing user.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (mut parts, body) = request.into_parts();

    let user = state.guard.validate(&parts).await?;
    tracing::Span::current().record("user_id", tracing::field::display(user.id));
    parts.extensions.insert(AuthenticatedUser(user));

    Ok(next.run(Request::from_parts(parts, body)).await)
}
