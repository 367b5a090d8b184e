pub mod config;
pub mod emotion;
pub mod error;
pub mod ingest;
pub mod privacy;

use std::borrow::Cow;
use std::path::{Path, PathBuf};

pub use emotion::EmotionEngine;
pub use emotion::aggregate::{BatchSummary, Distribution};
pub use emotion::category::Emotion;
pub use emotion::display::Language;
pub use emotion::resolver::{EmotionResult, EmotionSummary};
pub use emotion::scorer::ScoreMap;
pub use emotion::sentiment::{LexiconSentiment, SentimentReading, SentimentScorer};
pub use error::{CalmaError, Result};

// Load env from a simple, standardized location resolution:
// 1) CALMA_ENV_FILE if set, 2) ./.env. Silently ignores a missing file.
pub fn load_env() {
    let path = std::env::var("CALMA_ENV_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(".env"));
    load_env_from(&path);
}

/// Load variables from one dotenv file. Returns whether the file was read.
pub fn load_env_from(path: &Path) -> bool {
    dotenvy::from_path(path).is_ok()
}

/// Resolve one story with default tuning.
pub fn resolve(text: &str) -> EmotionResult {
    EmotionEngine::shared().resolve(text)
}

/// Detailed view of one story with default tuning.
pub fn summarize_text(text: &str) -> EmotionSummary {
    EmotionEngine::shared().summarize_text(text)
}

/// Batch statistics over already-resolved stories.
pub fn summarize(results: &[EmotionResult]) -> BatchSummary {
    emotion::aggregate::summarize(results)
}

/// Ranked support types for a label; falls back to a generic list.
pub fn recommend(label: &str) -> &'static [&'static str] {
    emotion::support::recommend(label)
}

/// Localized display text for a stored label.
pub fn display_label(label: &str, lang: Language) -> Cow<'static, str> {
    emotion::display::display_label(label, lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_env_from_reads_one_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "VOCES_CALMA_DOTENV_MARKER=loaded").unwrap();

        assert!(load_env_from(file.path()));
        assert_eq!(
            std::env::var("VOCES_CALMA_DOTENV_MARKER").as_deref(),
            Ok("loaded")
        );
        assert!(!load_env_from(Path::new("/nonexistent/voces_calma.env")));
    }
}
