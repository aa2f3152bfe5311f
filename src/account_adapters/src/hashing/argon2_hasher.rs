use account_core::{CredentialHasher, HasherError, Password, PasswordHash};
use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use crate::config::HashingSettings;

/// Argon2id hasher. Hashing runs on the blocking pool so it never stalls the
/// async workers.
#[derive(Clone)]
pub struct Argon2CredentialHasher {
    params: Params,
}

impl Argon2CredentialHasher {
    pub fn new(settings: &HashingSettings) -> Result<Self, HasherError> {
        let params = Params::new(
            settings.memory_size_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))?;

        Ok(Self { params })
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

#[async_trait::async_trait]
impl CredentialHasher for Argon2CredentialHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let password = password.clone();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                Self::argon2(params)
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| HasherError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordHash,
    ) -> Result<bool, HasherError> {
        let current_span: tracing::Span = tracing::Span::current();
        let password = password.clone();
        let digest = digest.clone();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let Ok(expected) = password_hash::PasswordHash::new(digest.as_ref().expose_secret())
                else {
                    tracing::warn!("Stored password digest could not be parsed");
                    return false;
                };

                Self::argon2(params)
                    .verify_password(password.as_ref().expose_secret().as_bytes(), &expected)
                    .is_ok()
            })
        })
        .await
        .map_err(|e| HasherError::UnexpectedError(e.to_string()))
    }
}
