//! Emotion labels and their fixed definition order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every label the engine can emit.
///
/// Variant order is the tie-break order: when two categories score the same,
/// the one declared first wins. `Ord` is derived so ordered maps iterate in
/// exactly this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
    Anxiety,
    Sadness,
    Exhaustion,
    Guilt,
    Anger,
    Hope,
    Overwhelm,
    FamilyStress,
    /// Fallback label, never produced by the keyword scorer.
    Neutral,
}

impl Emotion {
    /// Keyword-detectable categories in definition order.
    pub const DETECTABLE: [Emotion; 8] = [
        Emotion::Anxiety,
        Emotion::Sadness,
        Emotion::Exhaustion,
        Emotion::Guilt,
        Emotion::Anger,
        Emotion::Hope,
        Emotion::Overwhelm,
        Emotion::FamilyStress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Anxiety => "anxiety",
            Emotion::Sadness => "sadness",
            Emotion::Exhaustion => "exhaustion",
            Emotion::Guilt => "guilt",
            Emotion::Anger => "anger",
            Emotion::Hope => "hope",
            Emotion::Overwhelm => "overwhelm",
            Emotion::FamilyStress => "family_stress",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label string names no known emotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEmotion(pub String);

impl fmt::Display for UnknownEmotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown emotion label '{}'", self.0)
    }
}

impl std::error::Error for UnknownEmotion {}

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "anxiety" => Ok(Emotion::Anxiety),
            "sadness" => Ok(Emotion::Sadness),
            "exhaustion" => Ok(Emotion::Exhaustion),
            "guilt" => Ok(Emotion::Guilt),
            "anger" => Ok(Emotion::Anger),
            "hope" => Ok(Emotion::Hope),
            "overwhelm" => Ok(Emotion::Overwhelm),
            "family_stress" => Ok(Emotion::FamilyStress),
            "neutral" => Ok(Emotion::Neutral),
            _ => Err(UnknownEmotion(s.to_string())),
        }
    }
}
