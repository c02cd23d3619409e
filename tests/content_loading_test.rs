//! Content loading through the `ContentSource` seam.

mod common;

use std::io::Write;

use common::{canned_sources, ContentSource, InMemoryContent, PORTUGUESE_JSON, WATER_CYCLE_JSON};
use stepmatch::adapters::FileContentSource;
use stepmatch::content::{load_content, DEFAULT_TITLE};
use stepmatch::error::{ContentError, GameError, InvalidContent, LOAD_FAILURE_MESSAGE};
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(WATER_CYCLE_JSON.as_bytes()).unwrap();

    let model = load_content(&FileContentSource::new(file.path()))
        .await
        .unwrap();
    assert_eq!(model.title(), "The Water Cycle");
    assert_eq!(model.len(), 3);
    assert!(model.step("Condensation").is_some());
}

#[tokio::test]
async fn test_missing_file_shows_load_message() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_content(&FileContentSource::new(dir.path().join("absent.json")))
        .await
        .unwrap_err();

    assert!(matches!(err, ContentError::Load { .. }));
    assert_eq!(err.user_message(), LOAD_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_portuguese_keys_load() {
    let model = load_content(&InMemoryContent::new(PORTUGUESE_JSON))
        .await
        .unwrap();
    assert_eq!(model.title(), "Ciclo da Água");
    assert_eq!(model.steps()[1].name, "Condensação");
}

#[tokio::test]
async fn test_missing_title_uses_default() {
    let model = load_content(&InMemoryContent::new(
        r#"{"steps":[{"name":"A","description":"a"}]}"#,
    ))
    .await
    .unwrap();
    assert_eq!(model.title(), DEFAULT_TITLE);
}

#[tokio::test]
async fn test_duplicate_names_are_invalid() {
    let err = load_content(&InMemoryContent::new(
        r#"{"steps":[{"name":"A","description":"a"},{"name":"A","description":"b"}]}"#,
    ))
    .await
    .unwrap_err();
    assert!(matches!(
        err,
        ContentError::Invalid(InvalidContent::DuplicateName(_))
    ));
}

#[tokio::test]
async fn test_each_source_fetched_once() {
    for (source, should_load) in canned_sources() {
        let result = load_content(&source).await;
        assert_eq!(result.is_ok(), should_load, "{}", source.describe());
        assert_eq!(source.fetch_count(), 1, "no retries");

        if let Err(err) = result {
            let game_error = GameError::from(err);
            assert!(game_error.is_fatal());
            assert_eq!(game_error.user_message(), LOAD_FAILURE_MESSAGE);
        }
    }
}
