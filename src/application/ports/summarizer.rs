use async_trait::async_trait;

use crate::domain::StoredFile;

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Produce summary text for a stored upload.
    ///
    /// No transcription pipeline exists, so implementations work from fixed
    /// stand-in text rather than the audio content.
    async fn summarize(&self, file: &StoredFile) -> Result<String, SummarizerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
