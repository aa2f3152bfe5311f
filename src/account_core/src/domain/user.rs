use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    email::Email, full_name::FullName, password::PasswordHash, tokens::RefreshToken,
    user_id::UserId, username::Username,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid username")]
    InvalidUsername,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Full name must not be empty")]
    EmptyFullName,
}

/// A stored user record. Holds credentials and must never be serialized to
/// clients; use [`PublicUser`] for that.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub full_name: FullName,
    pub username: Username,
    pub email: Email,
    pub avatar: String,
    pub cover_image: String,
    pub password_hash: PasswordHash,
    pub refresh_token: Option<RefreshToken>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn to_public(&self) -> PublicUser {
        PublicUser::from(self)
    }
}

/// Input for creating a user record. The store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: FullName,
    pub username: Username,
    pub email: Email,
    pub avatar: String,
    pub cover_image: String,
    pub password_hash: PasswordHash,
}

/// Partial update of the editable account details.
#[derive(Debug, Clone, Default)]
pub struct AccountUpdate {
    pub full_name: Option<FullName>,
    pub email: Option<Email>,
    pub username: Option<Username>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none() && self.email.is_none() && self.username.is_none()
    }
}

/// The sanitized identity: everything except the password hash and the
/// refresh token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: UserId,
    pub full_name: FullName,
    pub username: Username,
    pub email: Email,
    pub avatar: String,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            cover_image: user.cover_image.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
