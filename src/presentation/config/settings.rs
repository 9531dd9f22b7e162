use serde::Deserialize;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_FILE_SIZE_MB: u64 = 10;
const DEFAULT_SUMMARIZER_PROVIDER: &str = "placeholder";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_MAX_TOKENS: usize = 150;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub summarizer: SummarizerSettings,
    pub cors: CorsSettings,
    pub errors: ErrorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub dir: String,
    pub max_file_size_mb: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerSettings {
    /// `placeholder` or `openai`.
    pub provider: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    /// Origin allow-list; `*` alone means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorSettings {
    /// When true, 500 responses carry the internal error detail. Off by
    /// default so I/O failures stay generic toward clients.
    pub expose_details: bool,
}

impl Settings {
    /// Build settings from environment variables, falling back to defaults.
    /// The process environment is the only configuration source.
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("HOST", "0.0.0.0"),
                port: env_parsed("PORT", DEFAULT_PORT),
            },
            upload: UploadSettings {
                dir: env_or("UPLOAD_DIR", DEFAULT_UPLOAD_DIR),
                max_file_size_mb: env_parsed("MAX_UPLOAD_SIZE_MB", DEFAULT_MAX_FILE_SIZE_MB),
            },
            summarizer: SummarizerSettings {
                provider: env_or("SUMMARIZER_PROVIDER", DEFAULT_SUMMARIZER_PROVIDER),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                base_url: env_or("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
                model: env_or("SUMMARIZER_MODEL", DEFAULT_MODEL),
                max_tokens: env_parsed("SUMMARY_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            },
            cors: CorsSettings {
                allowed_origins: env_or("ALLOWED_ORIGINS", "*")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            errors: ErrorSettings {
                expose_details: std::env::var("EXPOSE_ERROR_DETAILS")
                    .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                    .unwrap_or(false),
            },
        }
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.upload.max_file_size_mb * 1024 * 1024
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
