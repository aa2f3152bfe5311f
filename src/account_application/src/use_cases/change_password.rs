use account_core::{AccountError, CredentialHasher, Password, UserId, UserStore};
use secrecy::Secret;

/// Change password use case - replaces the stored digest after checking the
/// current password
pub struct ChangePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    user_store: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> ChangePasswordUseCase<'a, U, H>
where
    U: UserStore,
    H: CredentialHasher,
{
    pub fn new(user_store: &'a U, hasher: &'a H) -> Self {
        Self { user_store, hasher }
    }

    /// Existing sessions stay valid after the change.
    #[tracing::instrument(
        name = "ChangePasswordUseCase::execute",
        skip(self, old_password, new_password)
    )]
    pub async fn execute(
        &self,
        subject: &UserId,
        old_password: Secret<String>,
        new_password: Secret<String>,
    ) -> Result<(), AccountError> {
        let user = self.user_store.get_user(subject).await?;

        let old_matches = match Password::try_from(old_password) {
            Ok(old_password) => {
                self.hasher
                    .verify(&old_password, &user.password_hash)
                    .await?
            }
            Err(_) => false,
        };
        if !old_matches {
            return Err(AccountError::auth("Incorrect old password"));
        }

        let new_password = Password::try_from(new_password)
            .map_err(|_| AccountError::validation("New password is required"))?;
        let password_hash = self.hasher.hash(&new_password).await?;

        self.user_store
            .set_password_hash(&user.id, password_hash)
            .await?;

        Ok(())
    }
}
