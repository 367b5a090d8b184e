//! Story loading for batch analysis: CSV exports or plain text, one story per line.

use crate::error::{CalmaError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column read from CSV files when none is named.
pub const DEFAULT_COLUMN: &str = "story";

/// Load stories from `path`.
///
/// `.csv` files (or any file when `column` is given) are read as CSV with a
/// header row and the named column is collected; anything else is treated as
/// one story per non-blank line.
pub fn load_stories(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    if is_csv || column.is_some() {
        let file = File::open(path)?;
        read_csv_column(file, column.unwrap_or(DEFAULT_COLUMN))
    } else {
        let content = std::fs::read_to_string(path)?;
        Ok(read_lines(&content))
    }
}

pub fn read_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn read_csv_column<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();
    let idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(column))
        .ok_or_else(|| CalmaError::Validation {
            message: format!(
                "column '{}' not found; available: {}",
                column,
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        })?;

    let mut stories = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(value) = record.get(idx) {
            let value = value.trim();
            if !value.is_empty() {
                stories.push(value.to_string());
            }
        }
    }
    tracing::debug!(column, count = stories.len(), "stories read from csv");
    Ok(stories)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_skip_blanks() {
        let stories = read_lines("first story\n\n   \nsecond story  \n");
        assert_eq!(stories, vec!["first story", "second story"]);
    }

    #[test]
    fn csv_column_is_selected_case_insensitively() {
        let data = "id,Story,support\n1,\"I feel tired, always\",coaching\n2,,circles\n3,Things are better,mentoring\n";
        let stories = read_csv_column(data.as_bytes(), "story").unwrap();
        assert_eq!(stories, vec!["I feel tired, always", "Things are better"]);
    }

    #[test]
    fn missing_column_lists_headers() {
        let err = read_csv_column("id,text\n1,hello\n".as_bytes(), "story").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("column 'story' not found"));
        assert!(msg.contains("id, text"));
    }
}
