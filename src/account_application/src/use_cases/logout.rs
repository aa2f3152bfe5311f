use account_core::{AccountError, SessionStore, UserId};

/// Logout use case - ends the subject's session
pub struct LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    session_store: &'a S,
}

impl<'a, S> LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self { session_store }
    }

    /// Idempotent: logging out twice is not an error.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, subject: &UserId) -> Result<(), AccountError> {
        self.session_store.clear(subject).await?;
        Ok(())
    }
}
