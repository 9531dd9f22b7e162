use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{UploadStore, UploadStoreError};

/// Filesystem-backed upload store. The base directory is created on
/// construction; every stored object lands directly under it.
pub struct LocalUploadStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalUploadStore {
    pub fn new(base_path: PathBuf) -> Result<Self, UploadStoreError> {
        std::fs::create_dir_all(&base_path).map_err(UploadStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl UploadStore for LocalUploadStore {
    async fn store(
        &self,
        stored_name: &str,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        max_bytes: Option<u64>,
    ) -> Result<u64, UploadStoreError> {
        let store_path = StorePath::from(stored_name);
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(UploadStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Some(limit) = max_bytes {
                if total_bytes > limit {
                    let _ = upload.abort().await;
                    return Err(UploadStoreError::TooLarge { limit });
                }
            }
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(UploadStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| UploadStoreError::UploadFailed(e.to_string()))?;

        Ok(total_bytes)
    }
}
