use std::{path::Path, sync::Arc};

use account_core::{MediaAsset, MediaHost, MediaHostError};
use tokio::sync::Mutex;

/// In-process media host for local runs and API tests. Accepts any readable
/// file and hands back a deterministic URL.
#[derive(Debug, Clone, Default)]
pub struct MockMediaHost {
    assets: Arc<Mutex<Vec<String>>>,
}

impl MockMediaHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Public ids currently held by the host.
    pub async fn assets(&self) -> Vec<String> {
        self.assets.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl MediaHost for MockMediaHost {
    async fn upload(&self, path: &Path) -> Option<MediaAsset> {
        let readable = tokio::fs::metadata(path).await.is_ok_and(|m| m.is_file());
        let _ = tokio::fs::remove_file(path).await;
        if !readable {
            return None;
        }

        let public_id = uuid::Uuid::new_v4().simple().to_string();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("bin");
        self.assets.lock().await.push(public_id.clone());

        Some(MediaAsset {
            url: format!("https://media.localhost/upload/{public_id}.{extension}"),
            public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaHostError> {
        let mut assets = self.assets.lock().await;
        match assets.iter().position(|id| id == public_id) {
            Some(index) => {
                assets.remove(index);
                Ok(())
            }
            None => Err(MediaHostError::Rejected("not found".to_string())),
        }
    }
}
