use std::io::Write;
use voces_calma::ingest::load_stories;
use voces_calma::{Emotion, EmotionEngine};

#[test]
fn csv_export_is_read_by_column() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "created_at,story,support_type").unwrap();
    writeln!(file, "2024-01-02,\"I am exhausted, worn out\",Massage").unwrap();
    writeln!(file, "2024-01-03,I feel anxious,Circles").unwrap();
    file.flush().unwrap();

    let stories = load_stories(file.path(), None).unwrap();
    assert_eq!(stories.len(), 2);

    let summary = EmotionEngine::shared().analyze_batch(&stories);
    assert_eq!(summary.distribution.get(Emotion::Exhaustion), 1);
    assert_eq!(summary.distribution.get(Emotion::Anxiety), 1);
    assert_eq!(summary.most_common_label, Some(Emotion::Exhaustion));
}

#[test]
fn plain_text_is_one_story_per_line() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "I feel anxious").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Nothing much happened").unwrap();
    file.flush().unwrap();

    let stories = load_stories(file.path(), None).unwrap();
    assert_eq!(stories, vec!["I feel anxious", "Nothing much happened"]);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_stories(std::path::Path::new("/nonexistent/stories.txt"), None).unwrap_err();
    assert!(err.to_string().starts_with("I/O error"));
}
