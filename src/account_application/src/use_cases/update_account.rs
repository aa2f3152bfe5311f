use account_core::{
    AccountError, AccountUpdate, Email, FullName, PublicUser, UserId, UserStore, UserStoreError,
    Username,
};

use super::session::non_blank;

/// Raw account-details input; absent or blank fields are left unchanged.
#[derive(Debug, Default, Clone)]
pub struct AccountDetails {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Update account use case - edits name, email and username
pub struct UpdateAccountUseCase<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> UpdateAccountUseCase<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    #[tracing::instrument(name = "UpdateAccountUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        subject: &UserId,
        details: AccountDetails,
    ) -> Result<PublicUser, AccountError> {
        let update = AccountUpdate {
            full_name: non_blank(details.full_name)
                .map(FullName::try_from)
                .transpose()?,
            email: non_blank(details.email).map(Email::try_from).transpose()?,
            username: non_blank(details.username)
                .map(Username::try_from)
                .transpose()?,
        };
        if update.is_empty() {
            return Err(AccountError::validation("At least one field is required"));
        }

        if let Some(username) = &update.username {
            self.ensure_unclaimed(subject, Some(username), None).await?;
        }
        if let Some(email) = &update.email {
            self.ensure_unclaimed(subject, None, Some(email)).await?;
        }

        let user = self.user_store.update_account(subject, update).await?;
        Ok(user.to_public())
    }

    async fn ensure_unclaimed(
        &self,
        subject: &UserId,
        username: Option<&Username>,
        email: Option<&Email>,
    ) -> Result<(), AccountError> {
        match self
            .user_store
            .find_by_username_or_email(username, email)
            .await
        {
            Ok(owner) if owner.id != *subject => Err(UserStoreError::UserAlreadyExists.into()),
            Ok(_) | Err(UserStoreError::UserNotFound) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
