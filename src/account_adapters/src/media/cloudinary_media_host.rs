use std::path::Path;

use account_core::{MediaAsset, MediaHost, MediaHostError};
use reqwest::{
    Client, Url,
    multipart::{Form, Part},
};
use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};

use crate::config::MediaHostSettings;

/// Cloudinary upload API client using signed requests.
pub struct CloudinaryMediaHost {
    http_client: Client,
    base_url: String,
    cloud_name: String,
    api_key: String,
    api_secret: Secret<String>,
}

impl CloudinaryMediaHost {
    pub fn new(settings: &MediaHostSettings, http_client: Client) -> Self {
        Self {
            http_client,
            base_url: settings.base_url.clone(),
            cloud_name: settings.cloud_name.clone(),
            api_key: settings.api_key.clone(),
            api_secret: settings.api_secret.clone(),
        }
    }

    fn endpoint(&self, action: &str) -> Result<Url, MediaHostError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))?;
        base.join(&format!("/v1_1/{}/{action}", self.cloud_name))
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))
    }

    /// Signs the sorted `key=value` parameter string with the api secret.
    fn sign(&self, params: &[(&str, &str)]) -> String {
        let mut params = params.to_vec();
        params.sort_by(|a, b| a.0.cmp(b.0));
        let to_sign = params
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut hasher = Sha256::new();
        hasher.update(to_sign.as_bytes());
        hasher.update(self.api_secret.expose_secret().as_bytes());
        hex::encode(hasher.finalize())
    }

    async fn try_upload(&self, path: &Path) -> Result<MediaAsset, MediaHostError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("timestamp", &timestamp)]);

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", SIGNATURE_ALGORITHM);

        let response = self
            .http_client
            .post(self.endpoint("auto/upload")?)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| MediaHostError::Rejected(e.to_string()))?
            .json::<UploadResponse>()
            .await
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))?;

        Ok(MediaAsset {
            url: response.secure_url,
            public_id: response.public_id,
        })
    }
}

#[async_trait::async_trait]
impl MediaHost for CloudinaryMediaHost {
    #[tracing::instrument(name = "Uploading file to media host", skip_all)]
    async fn upload(&self, path: &Path) -> Option<MediaAsset> {
        let result = self.try_upload(path).await;

        if let Err(e) = tokio::fs::remove_file(path).await {
            tracing::warn!(error = %e, path = %path.display(), "failed to remove temporary upload");
        }

        match result {
            Ok(asset) => Some(asset),
            Err(e) => {
                tracing::error!(error = %e, "media upload failed");
                None
            }
        }
    }

    #[tracing::instrument(name = "Deleting file from media host", skip_all)]
    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        let signature = self.sign(&[("public_id", public_id), ("timestamp", &timestamp)]);

        let form = [
            ("public_id", public_id),
            ("api_key", self.api_key.as_str()),
            ("timestamp", timestamp.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", SIGNATURE_ALGORITHM),
        ];

        let response = self
            .http_client
            .post(self.endpoint("image/destroy")?)
            .form(&form)
            .send()
            .await
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| MediaHostError::Rejected(e.to_string()))?
            .json::<DestroyResponse>()
            .await
            .map_err(|e| MediaHostError::RequestFailed(e.to_string()))?;

        if response.result != "ok" {
            return Err(MediaHostError::Rejected(response.result));
        }
        tracing::debug!(public_id, "media asset deleted");
        Ok(())
    }
}

const SIGNATURE_ALGORITHM: &str = "sha256";

#[derive(serde::Deserialize, Debug)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(serde::Deserialize, Debug)]
struct DestroyResponse {
    result: String,
}
