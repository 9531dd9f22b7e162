use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::application::ports::{UploadStore, UploadStoreError};
use crate::domain::{generate_stored_name, is_supported_audio, StoredFile};

/// Multipart field name the client must use for the file part.
pub const AUDIO_FIELD: &str = "audio";

/// Receives one upload: applies the acceptance policy, generates the stored
/// name, and streams the bytes to the store. Validation short-circuits
/// before any byte is written.
pub struct UploadService {
    store: Arc<dyn UploadStore>,
    max_upload_bytes: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("No audio file uploaded")]
    MissingFile,
    #[error("Only audio files are allowed (got {mime_type} for \"{original_name}\")")]
    UnsupportedType {
        mime_type: String,
        original_name: String,
    },
    #[error("File exceeds the {limit_bytes} byte upload limit")]
    TooLarge { limit_bytes: u64 },
    #[error("Upload failed")]
    UploadFailed(#[source] UploadStoreError),
}

impl UploadService {
    pub fn new(store: Arc<dyn UploadStore>, max_upload_bytes: u64) -> Self {
        Self {
            store,
            max_upload_bytes,
        }
    }

    pub async fn receive(
        &self,
        original_name: &str,
        mime_type: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<StoredFile, UploadError> {
        if !is_supported_audio(mime_type, original_name) {
            tracing::warn!(
                mime_type = %mime_type,
                original_name = %original_name,
                "Rejected upload: not an audio file"
            );
            return Err(UploadError::UnsupportedType {
                mime_type: mime_type.to_string(),
                original_name: original_name.to_string(),
            });
        }

        let stored_name = generate_stored_name(AUDIO_FIELD, original_name);

        let size_bytes = self
            .store
            .store(&stored_name, stream, Some(self.max_upload_bytes))
            .await
            .map_err(|e| match e {
                UploadStoreError::TooLarge { limit } => UploadError::TooLarge { limit_bytes: limit },
                other => UploadError::UploadFailed(other),
            })?;

        tracing::info!(
            stored_name = %stored_name,
            original_name = %original_name,
            size_bytes,
            "Upload stored"
        );

        Ok(StoredFile::new(
            stored_name,
            original_name.to_string(),
            mime_type.to_string(),
            size_bytes,
        ))
    }
}
