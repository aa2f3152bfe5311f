use std::collections::HashMap;
use std::sync::Arc;

use account_core::{
    AccountUpdate, Email, MediaSlot, NewUser, PasswordHash, RefreshToken, SessionStore,
    SessionStoreError, User, UserId, UserStore, UserStoreError, Username,
};
use chrono::Utc;
use tokio::sync::RwLock;

/// In-memory user and session store. Every mutation happens under a single
/// write lock, so uniqueness checks and writes are atomic.
#[derive(Default, Clone)]
pub struct HashMapUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl HashMapUserStore {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn is_claimed_by_other(
    users: &HashMap<UserId, User>,
    id: Option<&UserId>,
    username: Option<&Username>,
    email: Option<&Email>,
) -> bool {
    users.values().any(|user| {
        Some(&user.id) != id
            && (Some(&user.username) == username || Some(&user.email) == email)
    })
}

#[async_trait::async_trait]
impl UserStore for HashMapUserStore {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if is_claimed_by_other(&users, None, Some(&user.username), Some(&user.email)) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let id = UserId::new();
        let now = Utc::now();
        users.insert(
            id,
            User {
                id,
                full_name: user.full_name,
                username: user.username,
                email: user.email,
                avatar: user.avatar,
                cover_image: user.cover_image,
                password_hash: user.password_hash,
                refresh_token: None,
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users.get(id).cloned().ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> Result<User, UserStoreError> {
        let users = self.users.read().await;
        users
            .values()
            .find(|user| Some(&user.username) == username || Some(&user.email) == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn set_password_hash(
        &self,
        id: &UserId,
        password_hash: PasswordHash,
    ) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;

        user.password_hash = password_hash;
        user.updated_at = Utc::now();
        Ok(())
    }

    async fn update_account(
        &self,
        id: &UserId,
        update: AccountUpdate,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        if is_claimed_by_other(
            &users,
            Some(id),
            update.username.as_ref(),
            update.email.as_ref(),
        ) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        let user = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;
        if let Some(full_name) = update.full_name {
            user.full_name = full_name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }

    async fn set_media(
        &self,
        id: &UserId,
        slot: MediaSlot,
        url: String,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(id).ok_or(UserStoreError::UserNotFound)?;

        match slot {
            MediaSlot::Avatar => user.avatar = url,
            MediaSlot::CoverImage => user.cover_image = url,
        }
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapUserStore {
    async fn persist(
        &self,
        subject: &UserId,
        token: &RefreshToken,
    ) -> Result<(), SessionStoreError> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(subject)
            .ok_or(SessionStoreError::UserNotFound)?;

        user.refresh_token = Some(token.clone());
        Ok(())
    }

    async fn clear(&self, subject: &UserId) -> Result<(), SessionStoreError> {
        let mut users = self.users.write().await;
        if let Some(user) = users.get_mut(subject) {
            user.refresh_token = None;
        }
        Ok(())
    }

    async fn current_of(
        &self,
        subject: &UserId,
    ) -> Result<Option<RefreshToken>, SessionStoreError> {
        let users = self.users.read().await;
        Ok(users
            .get(subject)
            .and_then(|user| user.refresh_token.clone()))
    }
}
