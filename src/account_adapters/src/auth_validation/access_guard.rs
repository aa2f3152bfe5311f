use account_core::{
    AccountError, AuthRequest, AuthValidator, PublicUser, TokenClass, TokenIssuer, UserStore,
    UserStoreError, extract_access_token,
};
use async_trait::async_trait;
use axum::http::request::Parts;
use thiserror::Error;

use super::request_parts::HttpRequestParts;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccessGuardError {
    #[error("Unauthorized request")]
    MissingToken,
    #[error("Invalid access token")]
    InvalidToken,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl From<AccessGuardError> for AccountError {
    fn from(error: AccessGuardError) -> Self {
        match error {
            AccessGuardError::MissingToken | AccessGuardError::InvalidToken => {
                AccountError::Auth(error.to_string())
            }
            AccessGuardError::UnexpectedError(e) => AccountError::Internal(e),
        }
    }
}

/// Authenticates requests by their access token and resolves the caller's
/// sanitized identity.
#[derive(Clone)]
pub struct AccessGuard<U, T> {
    user_store: U,
    token_issuer: T,
    cookie_name: String,
}

impl<U, T> AccessGuard<U, T>
where
    U: UserStore,
    T: TokenIssuer,
{
    pub fn new(user_store: U, token_issuer: T, cookie_name: impl Into<String>) -> Self {
        Self {
            user_store,
            token_issuer,
            cookie_name: cookie_name.into(),
        }
    }

    #[tracing::instrument(name = "AccessGuard::authenticate", skip_all)]
    pub async fn authenticate<R>(&self, request: &R) -> Result<PublicUser, AccessGuardError>
    where
        R: AuthRequest + ?Sized + Sync,
    {
        let token = extract_access_token(request, &self.cookie_name)
            .ok_or(AccessGuardError::MissingToken)?;

        let claims = self
            .token_issuer
            .verify(token, TokenClass::Access)
            .map_err(|e| {
                tracing::debug!("Access token rejected: {e}");
                AccessGuardError::InvalidToken
            })?;
        let subject = claims
            .subject()
            .map_err(|_| AccessGuardError::InvalidToken)?;

        match self.user_store.get_user(&subject).await {
            Ok(user) => Ok(user.to_public()),
            Err(UserStoreError::UserNotFound) => Err(AccessGuardError::InvalidToken),
            Err(e) => Err(AccessGuardError::UnexpectedError(e.to_string())),
        }
    }
}

#[async_trait]
impl<U, T> AuthValidator for AccessGuard<U, T>
where
    U: UserStore + Clone + 'static,
    T: TokenIssuer + Clone + 'static,
{
    type Claims = PublicUser;
    type RequestParts = Parts;
    type Error = AccessGuardError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        self.authenticate(&HttpRequestParts::new(parts)).await
    }
}
