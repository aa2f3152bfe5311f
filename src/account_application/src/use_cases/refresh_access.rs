use account_core::{
    AccountError, SessionStore, TokenClass, TokenIssuer, TokenPair, UserStore, UserStoreError,
};

use super::session::{issue_session, non_blank};

/// Refresh use case - exchanges the live refresh token for a new pair
pub struct RefreshAccessUseCase<'a, U, S, T>
where
    U: UserStore,
    S: SessionStore,
    T: TokenIssuer,
{
    user_store: &'a U,
    session_store: &'a S,
    token_issuer: &'a T,
}

impl<'a, U, S, T> RefreshAccessUseCase<'a, U, S, T>
where
    U: UserStore,
    S: SessionStore,
    T: TokenIssuer,
{
    pub fn new(user_store: &'a U, session_store: &'a S, token_issuer: &'a T) -> Self {
        Self {
            user_store,
            session_store,
            token_issuer,
        }
    }

    /// The presented token must verify AND equal the stored one. Both tokens
    /// are rotated, so a refresh token is usable exactly once.
    #[tracing::instrument(name = "RefreshAccessUseCase::execute", skip_all)]
    pub async fn execute(&self, presented: Option<String>) -> Result<TokenPair, AccountError> {
        let presented =
            non_blank(presented).ok_or_else(|| AccountError::auth("Unauthorized request"))?;

        let claims = self
            .token_issuer
            .verify(&presented, TokenClass::Refresh)
            .map_err(|e| {
                tracing::debug!("Refresh token rejected: {e}");
                AccountError::auth("Invalid refresh token")
            })?;
        let subject = claims
            .subject()
            .map_err(|_| AccountError::auth("Invalid refresh token"))?;

        let user = self
            .user_store
            .get_user(&subject)
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AccountError::auth("Invalid refresh token"),
                other => other.into(),
            })?;

        let current = self.session_store.current_of(&user.id).await?;
        if current.as_ref().map(|t| t.as_str()) != Some(presented.as_str()) {
            return Err(AccountError::auth("Expired refresh token"));
        }

        issue_session(self.token_issuer, self.session_store, &user.id).await
    }
}
