use std::sync::Arc;

use crate::application::ports::Summarizer;
use crate::application::services::UploadService;
use crate::presentation::config::Settings;

pub struct AppState<S: ?Sized>
where
    S: Summarizer,
{
    pub upload_service: Arc<UploadService>,
    pub summarizer: Arc<S>,
    pub settings: Settings,
}

impl<S: ?Sized> Clone for AppState<S>
where
    S: Summarizer,
{
    fn clone(&self) -> Self {
        Self {
            upload_service: Arc::clone(&self.upload_service),
            summarizer: Arc::clone(&self.summarizer),
            settings: self.settings.clone(),
        }
    }
}
