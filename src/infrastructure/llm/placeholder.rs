use async_trait::async_trait;

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::StoredFile;

pub const PLACEHOLDER_SUMMARY: &str =
    "This is a test summary (file was uploaded successfully)";

/// Summarizer that answers with a fixed string and never calls out.
pub struct PlaceholderSummarizer;

#[async_trait]
impl Summarizer for PlaceholderSummarizer {
    async fn summarize(&self, file: &StoredFile) -> Result<String, SummarizerError> {
        tracing::debug!(stored_name = %file.stored_name, "Returning placeholder summary");
        Ok(PLACEHOLDER_SUMMARY.to_string())
    }
}
