use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

/// Descriptor of a validated upload after its bytes reached disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Generated on-disk filename, unique within the upload directory.
    pub stored_name: String,
    /// Filename as supplied by the client.
    pub original_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

impl StoredFile {
    pub fn new(
        stored_name: String,
        original_name: String,
        mime_type: String,
        size_bytes: u64,
    ) -> Self {
        Self {
            stored_name,
            original_name,
            mime_type,
            size_bytes,
        }
    }
}

/// Generate a stored filename of the form
/// `<field>-<millisecond timestamp>-<random integer>.<original extension>`.
///
/// Not cryptographically secure; the random suffix only has to keep names
/// unique within one directory for the process lifetime, including uploads
/// landing in the same millisecond.
pub fn generate_stored_name(field_name: &str, original_name: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);

    match Path::new(original_name)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(ext) if !ext.is_empty() => {
            format!("{}-{}-{}.{}", field_name, millis, suffix, ext)
        }
        _ => format!("{}-{}-{}", field_name, millis, suffix),
    }
}
