use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{stream, StreamExt};

use voicebrief::application::ports::{UploadStore, UploadStoreError};
use voicebrief::application::services::{UploadError, UploadService};

/// Counts store calls and drains the stream without touching disk.
struct CountingStore {
    calls: AtomicUsize,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait::async_trait]
impl UploadStore for CountingStore {
    async fn store(
        &self,
        _stored_name: &str,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        _max_bytes: Option<u64>,
    ) -> Result<u64, UploadStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut total = 0u64;
        while let Some(chunk) = stream.next().await {
            total += chunk?.len() as u64;
        }
        Ok(total)
    }
}

fn single_chunk(data: &'static [u8]) -> BoxStream<'static, Result<Bytes, io::Error>> {
    Box::pin(stream::iter(vec![Ok(Bytes::from(data))]))
}

#[tokio::test]
async fn given_unsupported_type_when_receiving_then_store_is_never_called() {
    let store = Arc::new(CountingStore::new());
    let service = UploadService::new(Arc::clone(&store) as Arc<dyn UploadStore>, 1024);

    let result = service
        .receive("notes.txt", "text/plain", single_chunk(b"text"))
        .await;

    assert!(matches!(result, Err(UploadError::UnsupportedType { .. })));
    assert_eq!(store.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_valid_audio_when_receiving_then_descriptor_matches_upload() {
    let store = Arc::new(CountingStore::new());
    let service = UploadService::new(Arc::clone(&store) as Arc<dyn UploadStore>, 1024);

    let stored = service
        .receive("take.wav", "audio/wav", single_chunk(b"wav bytes"))
        .await
        .unwrap();

    assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    assert_eq!(stored.original_name, "take.wav");
    assert_eq!(stored.mime_type, "audio/wav");
    assert_eq!(stored.size_bytes, 9);
    assert!(stored.stored_name.starts_with("audio-"));
    assert!(stored.stored_name.ends_with(".wav"));
}

#[tokio::test]
async fn given_store_reporting_too_large_when_receiving_then_maps_to_too_large() {
    struct TooLargeStore;

    #[async_trait::async_trait]
    impl UploadStore for TooLargeStore {
        async fn store(
            &self,
            _stored_name: &str,
            _stream: BoxStream<'_, Result<Bytes, io::Error>>,
            max_bytes: Option<u64>,
        ) -> Result<u64, UploadStoreError> {
            Err(UploadStoreError::TooLarge {
                limit: max_bytes.unwrap_or(0),
            })
        }
    }

    let service = UploadService::new(Arc::new(TooLargeStore), 512);

    let result = service
        .receive("big.mp3", "audio/mpeg", single_chunk(b"oversized"))
        .await;

    assert!(matches!(
        result,
        Err(UploadError::TooLarge { limit_bytes: 512 })
    ));
}
