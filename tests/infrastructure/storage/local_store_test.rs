use std::io;

use bytes::Bytes;
use futures::stream;

use voicebrief::application::ports::{UploadStore, UploadStoreError};
use voicebrief::infrastructure::storage::LocalUploadStore;

fn create_test_store() -> (tempfile::TempDir, LocalUploadStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalUploadStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_valid_stream_when_storing_then_file_is_persisted() {
    let (dir, store) = create_test_store();

    let chunks = vec![Ok(Bytes::from("hello ")), Ok(Bytes::from("world"))];
    let byte_stream = Box::pin(stream::iter(chunks));

    let size = store
        .store("audio-1-1.mp3", byte_stream, None)
        .await
        .unwrap();

    assert_eq!(size, 11);
    let content = std::fs::read(dir.path().join("audio-1-1.mp3")).unwrap();
    assert_eq!(content, b"hello world");
}

#[tokio::test]
async fn given_cap_equal_to_size_when_storing_then_succeeds() {
    let (_dir, store) = create_test_store();

    let byte_stream = Box::pin(stream::iter(vec![Ok(Bytes::from("12345"))]));
    let size = store
        .store("audio-1-2.mp3", byte_stream, Some(5))
        .await
        .unwrap();

    assert_eq!(size, 5);
}

#[tokio::test]
async fn given_stream_over_cap_when_storing_then_too_large_and_no_partial_file() {
    let (dir, store) = create_test_store();

    let chunks = vec![Ok(Bytes::from("12345")), Ok(Bytes::from("67890"))];
    let byte_stream = Box::pin(stream::iter(chunks));

    let result = store.store("audio-1-3.mp3", byte_stream, Some(8)).await;

    assert!(matches!(result, Err(UploadStoreError::TooLarge { limit: 8 })));
    assert!(!dir.path().join("audio-1-3.mp3").exists());
}

#[tokio::test]
async fn given_stream_error_when_storing_then_no_partial_file_remains() {
    let (dir, store) = create_test_store();

    let chunks: Vec<Result<Bytes, io::Error>> = vec![
        Ok(Bytes::from("partial")),
        Err(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "client went away",
        )),
    ];
    let byte_stream = Box::pin(stream::iter(chunks));

    let result = store.store("audio-1-4.mp3", byte_stream, None).await;

    assert!(matches!(result, Err(UploadStoreError::Io(_))));
    assert!(!dir.path().join("audio-1-4.mp3").exists());
}

#[tokio::test]
async fn given_missing_directory_when_constructing_then_directory_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("uploads");

    LocalUploadStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
}
