use std::{path::Path, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    media::MediaAsset,
    password::{Password, PasswordHash},
    tokens::{AccessToken, RefreshToken, TokenClaims, TokenClass, TokenError},
    user_id::UserId,
};

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// One-way password hashing.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError>;

    /// Returns `false` both on mismatch and on a digest that cannot be parsed.
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordHash,
    ) -> Result<bool, HasherError>;
}

/// Mints and verifies signed, expiring tokens.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &UserId, class: TokenClass) -> Result<String, TokenError>;

    fn verify(&self, token: &str, class: TokenClass) -> Result<TokenClaims, TokenError>;

    fn issue_access(&self, subject: &UserId) -> Result<AccessToken, TokenError> {
        self.issue(subject, TokenClass::Access).map(AccessToken::new)
    }

    fn issue_refresh(&self, subject: &UserId) -> Result<RefreshToken, TokenError> {
        self.issue(subject, TokenClass::Refresh)
            .map(RefreshToken::new)
    }
}

#[derive(Debug, Error)]
pub enum MediaHostError {
    #[error("Media host request failed: {0}")]
    RequestFailed(String),
    #[error("Media host rejected the request: {0}")]
    Rejected(String),
}

/// External file hosting for profile images.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// Uploads the local file and removes it afterwards, whatever the outcome.
    /// Any failure collapses to `None`.
    async fn upload(&self, path: &Path) -> Option<MediaAsset>;

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError>;
}

#[async_trait]
impl<T: CredentialHasher + ?Sized> CredentialHasher for Arc<T> {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError> {
        (**self).hash(password).await
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordHash,
    ) -> Result<bool, HasherError> {
        (**self).verify(password, digest).await
    }
}

impl<T: TokenIssuer + ?Sized> TokenIssuer for Arc<T> {
    fn issue(&self, subject: &UserId, class: TokenClass) -> Result<String, TokenError> {
        (**self).issue(subject, class)
    }

    fn verify(&self, token: &str, class: TokenClass) -> Result<TokenClaims, TokenError> {
        (**self).verify(token, class)
    }
}

#[async_trait]
impl<T: MediaHost + ?Sized> MediaHost for Arc<T> {
    async fn upload(&self, path: &Path) -> Option<MediaAsset> {
        (**self).upload(path).await
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError> {
        (**self).delete(public_id).await
    }
}
