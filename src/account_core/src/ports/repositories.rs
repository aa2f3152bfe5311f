use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    media::MediaSlot,
    password::PasswordHash,
    tokens::RefreshToken,
    user::{AccountUpdate, NewUser, User},
    user_id::UserId,
    username::Username,
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User with email or username already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Record store for user identities. Implementations enforce uniqueness of
/// `username` and `email` and report violations as `UserAlreadyExists`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError>;

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;

    /// Finds the user whose username OR email matches any of the given values.
    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> Result<User, UserStoreError>;

    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError>;

    async fn update_account(
        &self,
        id: &UserId,
        update: AccountUpdate,
    ) -> Result<User, UserStoreError>;

    async fn set_media(
        &self,
        id: &UserId,
        slot: MediaSlot,
        url: String,
    ) -> Result<User, UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Holds the single live refresh token of each user.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Overwrites whatever token was stored for the subject.
    async fn persist(
        &self,
        subject: &UserId,
        token: &RefreshToken,
    ) -> Result<(), SessionStoreError>;

    /// Removes the stored token. Clearing an unknown subject is not an error.
    async fn clear(&self, subject: &UserId) -> Result<(), SessionStoreError>;

    async fn current_of(
        &self,
        subject: &UserId,
    ) -> Result<Option<RefreshToken>, SessionStoreError>;
}

#[async_trait]
impl<T: UserStore + ?Sized> UserStore for Arc<T> {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        (**self).add_user(user).await
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        (**self).get_user(id).await
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> Result<User, UserStoreError> {
        (**self).find_by_username_or_email(username, email).await
    }

    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        (**self).set_password_hash(id, password_hash).await
    }

    async fn update_account(
        &self,
        id: &UserId,
        update: AccountUpdate,
    ) -> Result<User, UserStoreError> {
        (**self).update_account(id, update).await
    }

    async fn set_media(
        &self,
        id: &UserId,
        slot: MediaSlot,
        url: String,
    ) -> Result<User, UserStoreError> {
        (**self).set_media(id, slot, url).await
    }
}

#[async_trait]
impl<T: SessionStore + ?Sized> SessionStore for Arc<T> {
    async fn persist(
        &self,
        subject: &UserId,
        token: &RefreshToken,
    ) -> Result<(), SessionStoreError> {
        (**self).persist(subject, token).await
    }

    async fn clear(&self, subject: &UserId) -> Result<(), SessionStoreError> {
        (**self).clear(subject).await
    }

    async fn current_of(
        &self,
        subject: &UserId,
    ) -> Result<Option<RefreshToken>, SessionStoreError> {
        (**self).current_of(subject).await
    }
}
