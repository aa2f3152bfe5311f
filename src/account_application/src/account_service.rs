use std::path::PathBuf;

use account_core::{
    AccountError, CredentialHasher, MediaHost, MediaSlot, PublicUser, SessionStore, TokenIssuer,
    TokenPair, UserId, UserStore,
};
use secrecy::Secret;

use crate::use_cases::{
    change_password::ChangePasswordUseCase,
    current_user::CurrentUserUseCase,
    login::{LoginOutcome, LoginUseCase},
    logout::LogoutUseCase,
    refresh_access::RefreshAccessUseCase,
    register::{RegisterUseCase, Registration},
    update_account::{AccountDetails, UpdateAccountUseCase},
    update_profile_image::UpdateProfileImageUseCase,
};

/// Entry point for every account operation. Holds the ports and runs the
/// matching use case per call.
#[derive(Clone)]
pub struct AccountService<U, S, H, T, M> {
    user_store: U,
    session_store: S,
    hasher: H,
    token_issuer: T,
    media_host: M,
}

impl<U, S, H, T, M> AccountService<U, S, H, T, M>
where
    U: UserStore,
    S: SessionStore,
    H: CredentialHasher,
    T: TokenIssuer,
    M: MediaHost,
{
    pub fn new(user_store: U, session_store: S, hasher: H, token_issuer: T, media_host: M) -> Self {
        Self {
            user_store,
            session_store,
            hasher,
            token_issuer,
            media_host,
        }
    }

    pub async fn register(&self, registration: Registration) -> Result<PublicUser, AccountError> {
        RegisterUseCase::new(&self.user_store, &self.hasher, &self.media_host)
            .execute(registration)
            .await
    }

    pub async fn login(
        &self,
        username: Option<String>,
        email: Option<String>,
        password: Secret<String>,
    ) -> Result<LoginOutcome, AccountError> {
        LoginUseCase::new(
            &self.user_store,
            &self.session_store,
            &self.hasher,
            &self.token_issuer,
        )
        .execute(username, email, password)
        .await
    }

    pub async fn logout(&self, subject: &UserId) -> Result<(), AccountError> {
        LogoutUseCase::new(&self.session_store).execute(subject).await
    }

    pub async fn refresh_access(&self, presented: Option<String>) -> Result<TokenPair, AccountError> {
        RefreshAccessUseCase::new(&self.user_store, &self.session_store, &self.token_issuer)
            .execute(presented)
            .await
    }

    pub async fn change_password(
        &self,
        subject: &UserId,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), AccountError> {
        ChangePasswordUseCase::new(&self.user_store, &self.hasher)
            .execute(subject, old_password, new_password)
            .await
    }

    pub async fn current_user(&self, subject: &UserId) -> Result<PublicUser, AccountError> {
        CurrentUserUseCase::new(&self.user_store)
            .execute(subject)
            .await
    }

    pub async fn update_account(
        &self,
        subject: &UserId,
        details: AccountDetails,
    ) -> Result<PublicUser, AccountError> {
        UpdateAccountUseCase::new(&self.user_store)
            .execute(subject, details)
            .await
    }

    pub async fn update_avatar(
        &self,
        subject: &UserId,
        file: Option<PathBuf>,
    ) -> Result<PublicUser, AccountError> {
        UpdateProfileImageUseCase::new(&self.user_store, &self.media_host)
            .execute(subject, MediaSlot::Avatar, file)
            .await
    }

    pub async fn update_cover_image(
        &self,
        subject: &UserId,
        file: Option<PathBuf>,
    ) -> Result<PublicUser, AccountError> {
        UpdateProfileImageUseCase::new(&self.user_store, &self.media_host)
            .execute(subject, MediaSlot::CoverImage, file)
            .await
    }
}
