mod openai_summarizer;
mod placeholder;
mod summarizer_factory;

pub use openai_summarizer::OpenAiSummarizer;
pub use placeholder::PlaceholderSummarizer;
pub use summarizer_factory::{create_summarizer, SummarizerConfigError};
