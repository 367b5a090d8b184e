//! Keyword hit counting per emotion category.

use super::category::Emotion;
use super::lexicon::EMOTION_KEYWORDS;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use unicode_normalization::UnicodeNormalization;

/// Hit counts keyed by emotion. Only positive counts are stored.
///
/// Backed by an ordered map so iteration always follows the category
/// definition order, which the resolver relies on for tie-breaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScoreMap(BTreeMap<Emotion, u32>);

impl<'de> Deserialize<'de> for ScoreMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<Emotion, u32>::deserialize(deserializer)?;
        let mut map = ScoreMap::new();
        for (emotion, count) in raw {
            map.insert(emotion, count);
        }
        Ok(map)
    }
}

impl ScoreMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// A map holding a single hit for `emotion`, used by the sentiment fallback.
    pub fn single(emotion: Emotion) -> Self {
        let mut map = Self::new();
        map.insert(emotion, 1);
        map
    }

    /// Record `count` hits. Zero counts are dropped.
    pub fn insert(&mut self, emotion: Emotion, count: u32) {
        if count > 0 {
            self.0.insert(emotion, count);
        }
    }

    pub fn get(&self, emotion: Emotion) -> u32 {
        self.0.get(&emotion).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in category definition order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, u32)> + '_ {
        self.0.iter().map(|(e, c)| (*e, *c))
    }

    /// The highest-scoring category; ties go to the earliest defined one.
    pub fn top(&self) -> Option<(Emotion, u32)> {
        let mut best: Option<(Emotion, u32)> = None;
        for (emotion, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((emotion, count)),
            }
        }
        best
    }

    /// Entries sorted by descending count, ties in definition order.
    pub fn ranked(&self) -> Vec<(Emotion, u32)> {
        let mut entries: Vec<(Emotion, u32)> = self.iter().collect();
        // sort_by is stable, so equal counts keep definition order
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Lowercased, NFC-composed form of `text` used for trigger matching.
pub fn normalize(text: &str) -> String {
    text.nfc().collect::<String>().to_lowercase()
}

/// Count distinct trigger hits per category.
///
/// Each trigger contributes at most one hit no matter how often it repeats.
/// Categories without hits are absent from the result.
pub fn score(text: &str) -> ScoreMap {
    let normalized = normalize(text);
    let mut scores = ScoreMap::new();
    if normalized.trim().is_empty() {
        return scores;
    }

    for (emotion, keywords) in EMOTION_KEYWORDS.iter() {
        let hits = keywords
            .iter()
            .filter(|kw| normalized.contains(*kw))
            .count() as u32;
        scores.insert(*emotion, hits);
    }
    scores
}
