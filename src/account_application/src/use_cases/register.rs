use std::path::PathBuf;

use account_core::{
    AccountError, CredentialHasher, Email, FullName, MediaHost, NewUser, Password, PublicUser,
    UserStore, UserStoreError, Username,
};
use secrecy::{ExposeSecret, Secret};

use super::session::non_blank;

/// Raw registration input as received from the transport layer. File fields
/// point at temporary local copies of the uploaded images.
#[derive(Debug, Default)]
pub struct Registration {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<Secret<String>>,
    pub avatar: Option<PathBuf>,
    pub cover_image: Option<PathBuf>,
}

/// Register use case - creates a new identity with its profile images
pub struct RegisterUseCase<'a, U, H, M>
where
    U: UserStore,
    H: CredentialHasher,
    M: MediaHost,
{
    user_store: &'a U,
    hasher: &'a H,
    media_host: &'a M,
}

impl<'a, U, H, M> RegisterUseCase<'a, U, H, M>
where
    U: UserStore,
    H: CredentialHasher,
    M: MediaHost,
{
    pub fn new(user_store: &'a U, hasher: &'a H, media_host: &'a M) -> Self {
        Self {
            user_store,
            hasher,
            media_host,
        }
    }

    /// Images are uploaded before the record is created, so a failed avatar
    /// upload never leaves an identity behind.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip(self, registration))]
    pub async fn execute(&self, registration: Registration) -> Result<PublicUser, AccountError> {
        let password = registration
            .password
            .filter(|p| !p.expose_secret().trim().is_empty());

        let (Some(full_name), Some(username), Some(email), Some(password)) = (
            non_blank(registration.full_name),
            non_blank(registration.username),
            non_blank(registration.email),
            password,
        ) else {
            return Err(AccountError::validation("All fields are required"));
        };

        let full_name = FullName::try_from(full_name)?;
        let username = Username::try_from(username)?;
        let email = Email::try_from(email)?;
        let password = Password::try_from(password)?;

        match self
            .user_store
            .find_by_username_or_email(Some(&username), Some(&email))
            .await
        {
            Ok(_) => return Err(UserStoreError::UserAlreadyExists.into()),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let avatar_path = registration
            .avatar
            .ok_or_else(|| AccountError::validation("Avatar image required"))?;

        let avatar = self
            .media_host
            .upload(&avatar_path)
            .await
            .ok_or_else(|| AccountError::validation("Avatar image required"))?;

        let cover_image = match registration.cover_image {
            Some(path) => self.media_host.upload(&path).await,
            None => None,
        };

        let password_hash = self.hasher.hash(&password).await?;

        let id = self
            .user_store
            .add_user(NewUser {
                full_name,
                username,
                email,
                avatar: avatar.url,
                cover_image: cover_image.map(|asset| asset.url).unwrap_or_default(),
                password_hash,
            })
            .await?;

        let created = self.user_store.get_user(&id).await.map_err(|e| {
            tracing::error!("Registered user {id} could not be read back: {e}");
            AccountError::internal("Error while registering user")
        })?;

        Ok(created.to_public())
    }
}
