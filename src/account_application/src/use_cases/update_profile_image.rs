use std::path::PathBuf;

use account_core::{
    AccountError, MediaHost, MediaSlot, PublicUser, UserId, UserStore, public_id_from_url,
};

/// Profile image use case - replaces the avatar or the cover image
pub struct UpdateProfileImageUseCase<'a, U, M>
where
    U: UserStore,
    M: MediaHost,
{
    user_store: &'a U,
    media_host: &'a M,
}

impl<'a, U, M> UpdateProfileImageUseCase<'a, U, M>
where
    U: UserStore,
    M: MediaHost,
{
    pub fn new(user_store: &'a U, media_host: &'a M) -> Self {
        Self {
            user_store,
            media_host,
        }
    }

    /// The new image is uploaded and stored first; the previous asset is then
    /// deleted on a best-effort basis.
    #[tracing::instrument(name = "UpdateProfileImageUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        subject: &UserId,
        slot: MediaSlot,
        file: Option<PathBuf>,
    ) -> Result<PublicUser, AccountError> {
        let file = file.ok_or_else(|| match slot {
            MediaSlot::Avatar => AccountError::validation("Missing avatar file"),
            MediaSlot::CoverImage => AccountError::validation("Missing cover image file"),
        })?;

        let current = self.user_store.get_user(subject).await?;
        let previous_url = match slot {
            MediaSlot::Avatar => current.avatar,
            MediaSlot::CoverImage => current.cover_image,
        };

        let asset = self
            .media_host
            .upload(&file)
            .await
            .ok_or_else(|| AccountError::validation("Error while uploading file"))?;

        let updated = self.user_store.set_media(subject, slot, asset.url).await?;

        if let Some(public_id) = public_id_from_url(&previous_url) {
            if public_id != asset.public_id {
                if let Err(e) = self.media_host.delete(public_id).await {
                    tracing::warn!("Failed to delete previous {slot:?} asset {public_id}: {e}");
                }
            }
        }

        Ok(updated.to_public())
    }
}
