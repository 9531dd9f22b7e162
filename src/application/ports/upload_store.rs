use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

#[async_trait::async_trait]
pub trait UploadStore: Send + Sync {
    /// Stream the upload's bytes to durable storage under `stored_name`.
    ///
    /// When `max_bytes` is set and the stream exceeds it, the write is
    /// aborted, any partial object is removed, and `TooLarge` is returned.
    /// Returns the total number of bytes written on success.
    async fn store(
        &self,
        stored_name: &str,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
        max_bytes: Option<u64>,
    ) -> Result<u64, UploadStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum UploadStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("file exceeds the size limit of {limit} bytes")]
    TooLarge { limit: u64 },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
