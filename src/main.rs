use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::net::TcpListener;

use voicebrief::application::services::UploadService;
use voicebrief::infrastructure::llm::create_summarizer;
use voicebrief::infrastructure::observability::{init_tracing, TracingConfig};
use voicebrief::infrastructure::storage::LocalUploadStore;
use voicebrief::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(TracingConfig::default());

    let upload_store = Arc::new(LocalUploadStore::new(PathBuf::from(&settings.upload.dir))?);
    let upload_service = Arc::new(UploadService::new(
        upload_store,
        settings.max_upload_bytes(),
    ));
    let summarizer = create_summarizer(&settings.summarizer)?;

    tracing::info!(
        upload_dir = %settings.upload.dir,
        max_upload_mb = settings.upload.max_file_size_mb,
        summarizer = %settings.summarizer.provider,
        "Configuration loaded"
    );

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        upload_service,
        summarizer,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
