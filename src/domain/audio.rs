use std::path::Path;

/// Filename extensions accepted when the declared MIME type is not `audio/*`.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["mp3", "wav", "m4a", "aac", "ogg"];

/// Acceptance policy for uploaded files: either the declared MIME type is an
/// audio type, or the original filename carries a known audio extension.
pub fn is_supported_audio(mime_type: &str, original_name: &str) -> bool {
    if mime_type.starts_with("audio/") {
        return true;
    }

    Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ALLOWED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}
