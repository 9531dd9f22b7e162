use std::sync::Arc;

use crate::application::ports::Summarizer;
use crate::presentation::config::SummarizerSettings;

use super::{OpenAiSummarizer, PlaceholderSummarizer};

#[derive(Debug, thiserror::Error)]
pub enum SummarizerConfigError {
    #[error("unknown summarizer provider: {0}. Expected: placeholder or openai")]
    UnknownProvider(String),
    #[error("api_key required for the openai provider")]
    MissingApiKey,
}

pub fn create_summarizer(
    settings: &SummarizerSettings,
) -> Result<Arc<dyn Summarizer>, SummarizerConfigError> {
    match settings.provider.as_str() {
        "placeholder" => Ok(Arc::new(PlaceholderSummarizer)),
        "openai" => {
            let api_key = settings
                .api_key
                .clone()
                .filter(|k| !k.is_empty())
                .ok_or(SummarizerConfigError::MissingApiKey)?;
            Ok(Arc::new(OpenAiSummarizer::new(
                settings.base_url.clone(),
                api_key,
                settings.model.clone(),
                settings.max_tokens,
            )))
        }
        other => Err(SummarizerConfigError::UnknownProvider(other.to_string())),
    }
}
