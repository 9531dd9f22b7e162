mod settings;

pub use settings::{
    CorsSettings, ErrorSettings, ServerSettings, Settings, SummarizerSettings, UploadSettings,
};
