use thiserror::Error;

use crate::{
    domain::{tokens::TokenError, user::UserError},
    ports::{
        repositories::{SessionStoreError, UserStoreError},
        services::{HasherError, MediaHostError},
    },
};

/// Outcome taxonomy of every account operation. Each variant maps to exactly
/// one HTTP status.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Auth(String),
    #[error("{0}")]
    Internal(String),
}

impl AccountError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            AccountError::Validation(_) => 400,
            AccountError::Auth(_) => 401,
            AccountError::NotFound(_) => 404,
            AccountError::Conflict(_) => 409,
            AccountError::Internal(_) => 500,
        }
    }
}

impl From<UserError> for AccountError {
    fn from(error: UserError) -> Self {
        AccountError::Validation(error.to_string())
    }
}

impl From<UserStoreError> for AccountError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => AccountError::Conflict(error.to_string()),
            UserStoreError::UserNotFound => AccountError::NotFound(error.to_string()),
            UserStoreError::UnexpectedError(e) => AccountError::Internal(e),
        }
    }
}

impl From<SessionStoreError> for AccountError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::UserNotFound => AccountError::NotFound(error.to_string()),
            SessionStoreError::UnexpectedError(e) => AccountError::Internal(e),
        }
    }
}

impl From<HasherError> for AccountError {
    fn from(error: HasherError) -> Self {
        AccountError::Internal(error.to_string())
    }
}

impl From<MediaHostError> for AccountError {
    fn from(error: MediaHostError) -> Self {
        AccountError::Internal(error.to_string())
    }
}

// Verification failures are mapped explicitly by callers; what reaches this
// conversion is a failure to mint a token.
impl From<TokenError> for AccountError {
    fn from(error: TokenError) -> Self {
        AccountError::Internal(format!("Failed to generate tokens: {error}"))
    }
}
