use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use account_core::AccountError;
use axum::extract::Multipart;

/// Text fields and spooled files of a multipart form.
///
/// Files land in the upload directory under random names. Whatever the media
/// host has not already consumed is removed when the form is dropped.
#[derive(Debug, Default)]
pub struct UploadForm {
    fields: HashMap<String, String>,
    files: HashMap<String, PathBuf>,
}

impl UploadForm {
    /// Reads the whole form. Only `file_fields` may carry files, each at most
    /// once; empty file parts count as absent.
    pub async fn from_multipart(
        multipart: &mut Multipart,
        upload_dir: &Path,
        file_fields: &[&str],
    ) -> Result<Self, AccountError> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AccountError::validation(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            let Some(file_name) = field.file_name().map(str::to_owned) else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AccountError::validation(e.body_text()))?;
                form.fields.insert(name, value);
                continue;
            };

            if !file_fields.contains(&name.as_str()) {
                return Err(AccountError::validation(format!("Unexpected field: {name}")));
            }
            if form.files.contains_key(&name) {
                return Err(AccountError::validation(format!(
                    "Only one file allowed for {name}"
                )));
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| AccountError::validation(e.body_text()))?;
            if bytes.is_empty() {
                continue;
            }

            let path = upload_dir.join(spool_name(&file_name));
            tokio::fs::create_dir_all(upload_dir)
                .await
                .map_err(|e| AccountError::internal(e.to_string()))?;
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(|e| AccountError::internal(e.to_string()))?;
            form.files.insert(name, path);
        }

        Ok(form)
    }

    /// Takes a text field, treating blank values as absent.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|v| !v.trim().is_empty())
    }

    pub fn file(&self, name: &str) -> Option<PathBuf> {
        self.files.get(name).cloned()
    }
}

impl Drop for UploadForm {
    fn drop(&mut self) {
        for path in self.files.values() {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    tracing::warn!(error = %e, path = %path.display(), "failed to remove upload");
                }
            }
        }
    }
}

// Keeps only an alphanumeric extension from the client supplied name.
fn spool_name(original: &str) -> String {
    let id = uuid::Uuid::new_v4().simple();
    match Path::new(original)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
    {
        Some(ext) => format!("{id}.{}", ext.to_ascii_lowercase()),
        None => id.to_string(),
    }
}
