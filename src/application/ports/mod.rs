mod summarizer;
mod upload_store;

pub use summarizer::{Summarizer, SummarizerError};
pub use upload_store::{UploadStore, UploadStoreError};
