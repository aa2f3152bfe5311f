use account_core::{AccountError, PublicUser, UserId, UserStore};

/// Current user use case - looks up the sanitized identity of a subject
pub struct CurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> CurrentUserUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "CurrentUserUseCase::execute", skip(self))]
    pub async fn execute(&self, subject: &UserId) -> Result<PublicUser, AccountError> {
        let user = self.user_store.get_user(subject).await?;
        Ok(user.to_public())
    }
}
