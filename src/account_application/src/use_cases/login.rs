use account_core::{
    AccountError, CredentialHasher, Email, Password, PublicUser, SessionStore, TokenIssuer,
    TokenPair, UserStore, UserStoreError, Username,
};
use secrecy::Secret;

use super::session::{issue_session, non_blank};

/// Successful login: the sanitized identity and the freshly issued tokens.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: PublicUser,
    pub tokens: TokenPair,
}

/// Login use case - verifies credentials and opens a session
pub struct LoginUseCase<'a, U, S, H, T>
where
    U: UserStore,
    S: SessionStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    user_store: &'a U,
    session_store: &'a S,
    hasher: &'a H,
    token_issuer: &'a T,
}

impl<'a, U, S, H, T> LoginUseCase<'a, U, S, H, T>
where
    U: UserStore,
    S: SessionStore,
    H: CredentialHasher,
    T: TokenIssuer,
{
    pub fn new(user_store: &'a U, session_store: &'a S, hasher: &'a H, token_issuer: &'a T) -> Self {
        Self {
            user_store,
            session_store,
            hasher,
            token_issuer,
        }
    }

    /// Either identifier may be given; a user matching the username OR the
    /// email is accepted.
    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        username: Option<String>,
        email: Option<String>,
        password: Secret<String>,
    ) -> Result<LoginOutcome, AccountError> {
        let username = non_blank(username);
        let email = non_blank(email);
        if username.is_none() && email.is_none() {
            return Err(AccountError::validation("Username or email is required"));
        }

        // An identifier that does not parse cannot match any stored record.
        let username = username.and_then(|u| Username::try_from(u).ok());
        let email = email.and_then(|e| Email::try_from(e).ok());
        let password = Password::try_from(password)
            .map_err(|_| AccountError::validation("Password is required"))?;

        if username.is_none() && email.is_none() {
            return Err(AccountError::not_found("User does not exist"));
        }

        let user = self
            .user_store
            .find_by_username_or_email(username.as_ref(), email.as_ref())
            .await
            .map_err(|e| match e {
                UserStoreError::UserNotFound => AccountError::not_found("User does not exist"),
                other => other.into(),
            })?;

        if !self.hasher.verify(&password, &user.password_hash).await? {
            return Err(AccountError::auth("Incorrect password"));
        }

        let tokens = issue_session(self.token_issuer, self.session_store, &user.id).await?;

        Ok(LoginOutcome {
            user: user.to_public(),
            tokens,
        })
    }
}
