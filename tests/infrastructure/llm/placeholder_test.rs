use voicebrief::application::ports::Summarizer;
use voicebrief::domain::StoredFile;
use voicebrief::infrastructure::llm::PlaceholderSummarizer;

#[tokio::test]
async fn given_stored_file_when_summarizing_then_returns_fixed_text() {
    let file = StoredFile::new(
        "audio-1-1.mp3".to_string(),
        "sample.mp3".to_string(),
        "audio/mpeg".to_string(),
        42,
    );

    let summary = PlaceholderSummarizer.summarize(&file).await.unwrap();

    assert!(!summary.is_empty());
    assert!(summary.contains("uploaded successfully"));
}
