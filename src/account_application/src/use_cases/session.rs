use account_core::{AccountError, SessionStore, TokenIssuer, TokenPair, UserId};

/// Mints a fresh access/refresh pair and records the refresh token as the
/// subject's only live session.
#[tracing::instrument(name = "Issue session tokens", skip(issuer, sessions))]
pub async fn issue_session<T, S>(
    issuer: &T,
    sessions: &S,
    subject: &UserId,
) -> Result<TokenPair, AccountError>
where
    T: TokenIssuer + ?Sized,
    S: SessionStore + ?Sized,
{
    let access_token = issuer.issue_access(subject)?;
    let refresh_token = issuer.issue_refresh(subject)?;

    sessions.persist(subject, &refresh_token).await?;

    Ok(TokenPair {
        access_token,
        refresh_token,
    })
}

/// Returns `None` for absent or whitespace-only input.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
