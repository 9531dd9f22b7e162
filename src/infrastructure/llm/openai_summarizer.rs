use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{Summarizer, SummarizerError};
use crate::domain::StoredFile;

const SYSTEM_PROMPT: &str =
    "You summarize voice memos into a short paragraph of plain text.";

// No transcription pipeline exists; the upstream call works from this
// stand-in text instead of the uploaded audio.
const PLACEHOLDER_TRANSCRIPT: &str = "The user recorded a short voice memo. \
     Produce a brief placeholder summary acknowledging the recording.";

/// One-shot chat-completions client against an OpenAI-compatible endpoint.
pub struct OpenAiSummarizer {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: usize,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: usize,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiSummarizer {
    pub fn new(base_url: String, api_key: String, model: String, max_tokens: usize) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            max_tokens,
        }
    }

    fn build_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user".to_string(),
                content: PLACEHOLDER_TRANSCRIPT.to_string(),
            },
        ]
    }
}

#[async_trait]
impl Summarizer for OpenAiSummarizer {
    async fn summarize(&self, file: &StoredFile) -> Result<String, SummarizerError> {
        tracing::debug!(stored_name = %file.stored_name, model = %self.model, "Requesting summary");

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(),
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| SummarizerError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(SummarizerError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SummarizerError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| SummarizerError::InvalidResponse(e.to_string()))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummarizerError::InvalidResponse("empty choices".to_string()))
    }
}
