//! In-memory port implementations shared by the use-case tests.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
};

use account_core::{
    AccountUpdate, CredentialHasher, Email, HasherError, MediaAsset, MediaHost, MediaHostError,
    MediaSlot, NewUser, Password, PasswordHash, PublicUser, RefreshToken, SessionStore,
    SessionStoreError, TokenClaims, TokenClass, TokenError, TokenIssuer, User, UserId, UserStore,
    UserStoreError, Username,
};
use chrono::Utc;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use crate::{AccountService, Registration};

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl MockUserStore {
    pub async fn get(&self, id: &UserId) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn add_user(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let mut users = self.users.write().await;
        if users
            .values()
            .any(|u| u.username == user.username || u.email == user.email)
        {
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
        self.get(id).await.ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_username_or_email(
        &self,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|u| Some(&u.username) == username || Some(&u.email) == email)
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
        Ok(())
    }

    async fn update_account(
        &self,
        id: &UserId,
        update: AccountUpdate,
    ) -> Result<User, UserStoreError> {
        let mut users = self.users.write().await;
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
        Ok(user.clone())
    }
}

#[async_trait::async_trait]
impl SessionStore for MockUserStore {
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
        if let Some(user) = self.users.write().await.get_mut(subject) {
            user.refresh_token = None;
        }
        Ok(())
    }

    async fn current_of(
        &self,
        subject: &UserId,
    ) -> Result<Option<RefreshToken>, SessionStoreError> {
        Ok(self
            .users
            .read()
            .await
            .get(subject)
            .and_then(|u| u.refresh_token.clone()))
    }
}

/// Reversible stand-in for a real password hash.
#[derive(Clone, Default)]
pub struct MockHasher;

#[async_trait::async_trait]
impl CredentialHasher for MockHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError> {
        Ok(PasswordHash::new(Secret::new(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordHash,
    ) -> Result<bool, HasherError> {
        Ok(digest.as_ref().expose_secret()
            == &format!("hashed:{}", password.as_ref().expose_secret()))
    }
}

/// Issues `<class>.<subject>.<serial>` tokens.
#[derive(Clone, Default)]
pub struct MockTokenIssuer {
    serial: Arc<AtomicU64>,
}

fn class_tag(class: TokenClass) -> &'static str {
    match class {
        TokenClass::Access => "access",
        TokenClass::Refresh => "refresh",
    }
}

impl TokenIssuer for MockTokenIssuer {
    fn issue(&self, subject: &UserId, class: TokenClass) -> Result<String, TokenError> {
        let serial = self.serial.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{}.{}.{}", class_tag(class), subject, serial))
    }

    fn verify(&self, token: &str, class: TokenClass) -> Result<TokenClaims, TokenError> {
        let mut parts = token.split('.');
        let (Some(tag), Some(sub), Some(_serial), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Malformed);
        };
        if tag == "expired" {
            return Err(TokenError::Expired);
        }
        if tag != class_tag(class) {
            return Err(TokenError::InvalidSignature);
        }
        Ok(TokenClaims {
            sub: sub.to_string(),
            iat: 0,
            exp: u64::MAX,
            jti: None,
        })
    }
}

#[derive(Clone, Default)]
pub struct MockMediaHost {
    pub fail_uploads: bool,
    pub fail_deletes: bool,
    pub uploads: Arc<Mutex<Vec<PathBuf>>>,
    pub deletes: Arc<Mutex<Vec<String>>>,
}

impl MockMediaHost {
    pub fn failing() -> Self {
        Self {
            fail_uploads: true,
            ..Default::default()
        }
    }

    pub fn uploads(&self) -> Vec<PathBuf> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MediaHost for MockMediaHost {
    async fn upload(&self, path: &Path) -> Option<MediaAsset> {
        if self.fail_uploads {
            return None;
        }
        let mut uploads = self.uploads.lock().unwrap();
        uploads.push(path.to_path_buf());
        let public_id = format!("asset{}", uploads.len());
        Some(MediaAsset {
            url: format!("https://media.test/upload/{public_id}.png"),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError> {
        self.deletes.lock().unwrap().push(public_id.to_string());
        if self.fail_deletes {
            return Err(MediaHostError::Rejected("not found".to_string()));
        }
        Ok(())
    }
}

pub type TestService =
    AccountService<MockUserStore, MockUserStore, MockHasher, MockTokenIssuer, MockMediaHost>;

pub fn service_with_media(media: MockMediaHost) -> (TestService, MockUserStore) {
    let store = MockUserStore::default();
    let service = AccountService::new(
        store.clone(),
        store.clone(),
        MockHasher,
        MockTokenIssuer::default(),
        media,
    );
    (service, store)
}

pub fn service() -> (TestService, MockUserStore) {
    service_with_media(MockMediaHost::default())
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::new(value.to_string())
}

pub fn jane() -> Registration {
    Registration {
        full_name: Some("Jane Doe".to_string()),
        username: Some("JaneD".to_string()),
        email: Some("jane@x.io".to_string()),
        password: Some(secret("p@ss1")),
        avatar: Some(PathBuf::from("/tmp/avatar.png")),
        cover_image: None,
    }
}

/// A service with Jane already registered.
pub async fn registered() -> (TestService, MockUserStore, PublicUser) {
    let (service, store) = service();
    let user = service.register(jane()).await.unwrap();
    (service, store, user)
}
