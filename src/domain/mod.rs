mod audio;
mod stored_file;

pub use audio::{is_supported_audio, ALLOWED_EXTENSIONS};
pub use stored_file::{generate_stored_name, StoredFile};
