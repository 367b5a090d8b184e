//! Batch statistics over resolved stories, feeding dashboards.

use super::category::Emotion;
use super::resolver::EmotionResult;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Label counts in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution(Vec<(Emotion, usize)>);

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, emotion: Emotion) {
        match self.0.iter_mut().find(|(e, _)| *e == emotion) {
            Some((_, count)) => *count += 1,
            None => self.0.push((emotion, 1)),
        }
    }

    pub fn get(&self, emotion: Emotion) -> usize {
        self.0
            .iter()
            .find(|(e, _)| *e == emotion)
            .map_or(0, |(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (Emotion, usize)> + '_ {
        self.0.iter().copied()
    }

    /// Highest count; ties go to the label seen first.
    pub fn most_common(&self) -> Option<Emotion> {
        let mut best: Option<(Emotion, usize)> = None;
        for (emotion, count) in self.iter() {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((emotion, count));
            }
        }
        best.map(|(e, _)| e)
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (emotion, count) in self.0.iter() {
            map.serialize_entry(emotion.as_str(), count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSummary {
    pub distribution: Distribution,
    pub total_items: usize,
    pub average_confidence: f64,
    pub most_common_label: Option<Emotion>,
}

impl BatchSummary {
    /// Percentage of items carrying `emotion`, one decimal place.
    pub fn share(&self, emotion: Emotion) -> f64 {
        if self.total_items == 0 {
            return 0.0;
        }
        let pct = self.distribution.get(emotion) as f64 / self.total_items as f64 * 100.0;
        (pct * 10.0).round() / 10.0
    }
}

/// Reduce per-story results into dashboard statistics.
pub fn summarize<'a, I>(results: I) -> BatchSummary
where
    I: IntoIterator<Item = &'a EmotionResult>,
{
    let mut distribution = Distribution::new();
    let mut total_items = 0usize;
    let mut confidence_sum = 0.0f64;

    for result in results {
        distribution.record(result.primary_label);
        confidence_sum += result.confidence;
        total_items += 1;
    }

    let average_confidence = if total_items == 0 {
        0.0
    } else {
        confidence_sum / total_items as f64
    };

    BatchSummary {
        most_common_label: distribution.most_common(),
        distribution,
        total_items,
        average_confidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::scorer::ScoreMap;

    fn result(emotion: Emotion, confidence: f64) -> EmotionResult {
        EmotionResult {
            primary_label: emotion,
            confidence,
            all_scores: ScoreMap::single(emotion),
        }
    }

    #[test]
    fn empty_batch() {
        let empty: Vec<EmotionResult> = Vec::new();
        let summary = summarize(&empty);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.average_confidence, 0.0);
        assert_eq!(summary.most_common_label, None);
        assert!(summary.distribution.is_empty());
        assert_eq!(summary.share(Emotion::Hope), 0.0);
    }

    #[test]
    fn counts_and_average() {
        let batch = vec![
            result(Emotion::Guilt, 1.0),
            result(Emotion::Guilt, 0.5),
            result(Emotion::Hope, 0.75),
        ];
        let summary = summarize(&batch);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.distribution.get(Emotion::Guilt), 2);
        assert_eq!(summary.distribution.get(Emotion::Hope), 1);
        assert_eq!(summary.distribution.get(Emotion::Anger), 0);
        assert_eq!(summary.most_common_label, Some(Emotion::Guilt));
        assert!((summary.average_confidence - 0.75).abs() < 1e-12);
        assert_eq!(summary.share(Emotion::Guilt), 66.7);
    }

    #[test]
    fn most_common_ties_go_to_first_seen() {
        let batch = vec![
            result(Emotion::Overwhelm, 0.5),
            result(Emotion::Anxiety, 0.5),
            result(Emotion::Anxiety, 0.5),
            result(Emotion::Overwhelm, 0.5),
        ];
        assert_eq!(summarize(&batch).most_common_label, Some(Emotion::Overwhelm));
    }

    #[test]
    fn distribution_serializes_in_first_seen_order() {
        let batch = vec![
            result(Emotion::Neutral, 0.5),
            result(Emotion::Anxiety, 1.0),
            result(Emotion::Neutral, 0.5),
        ];
        let json = serde_json::to_string(&summarize(&batch).distribution).unwrap();
        assert_eq!(json, r#"{"neutral":2,"anxiety":1}"#);
    }
}
