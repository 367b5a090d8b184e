//! Combines keyword scores and the sentiment fallback into one result.

use super::category::Emotion;
use super::scorer::{ScoreMap, score};
use super::sentiment::{SentimentReading, SentimentScorer};
use crate::config::EngineConfig;
use serde::{Deserialize, Serialize};

/// Outcome of resolving one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionResult {
    pub primary_label: Emotion,
    /// Support strength in [0, 1]; not a calibrated probability.
    pub confidence: f64,
    pub all_scores: ScoreMap,
}

/// Expanded view of a resolution for detail displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionSummary {
    pub primary_label: Emotion,
    /// Rounded to two decimals.
    pub confidence: f64,
    pub ranked_scores: Vec<(Emotion, u32)>,
    pub emotion_count: usize,
    pub is_mixed: bool,
    pub sentiment: SentimentReading,
}

/// Keyword density against text length, saturating at 1.0.
pub fn keyword_confidence(hits: u32, word_count: usize, density_window: usize) -> f64 {
    let window = density_window.max(1) as f64;
    let denominator = (word_count as f64 / window).max(1.0);
    (hits as f64 / denominator).min(1.0)
}

pub(crate) fn resolve_with(
    text: &str,
    config: &EngineConfig,
    sentiment: &(dyn SentimentScorer + Send + Sync),
) -> EmotionResult {
    let scores = score(text);

    if let Some((primary, hits)) = scores.top() {
        let word_count = text.split_whitespace().count();
        let confidence = keyword_confidence(hits, word_count, config.density_window);
        tracing::debug!(
            label = %primary,
            hits,
            word_count,
            categories = scores.len(),
            "resolved by keywords"
        );
        return EmotionResult {
            primary_label: primary,
            confidence,
            all_scores: scores,
        };
    }

    let reading = sentiment.polarity(text);
    let compound = reading.compound.clamp(-1.0, 1.0);
    let (label, confidence) = if compound <= -config.fallback_threshold {
        (Emotion::Sadness, compound.abs())
    } else if compound >= config.fallback_threshold {
        (Emotion::Hope, compound)
    } else {
        (Emotion::Neutral, config.neutral_confidence)
    };
    tracing::debug!(
        label = %label,
        compound,
        scorer = sentiment.name(),
        "resolved by sentiment fallback"
    );

    EmotionResult {
        primary_label: label,
        confidence: confidence.clamp(0.0, 1.0),
        all_scores: ScoreMap::single(label),
    }
}

pub(crate) fn summarize_with(
    text: &str,
    config: &EngineConfig,
    sentiment: &(dyn SentimentScorer + Send + Sync),
) -> EmotionSummary {
    let result = resolve_with(text, config, sentiment);
    let ranked_scores = result.all_scores.ranked();
    let emotion_count = ranked_scores.len();

    EmotionSummary {
        primary_label: result.primary_label,
        confidence: (result.confidence * 100.0).round() / 100.0,
        ranked_scores,
        emotion_count,
        is_mixed: emotion_count > config.mixed_threshold,
        sentiment: sentiment.polarity(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSentiment(f64);

    impl SentimentScorer for FixedSentiment {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn polarity(&self, _text: &str) -> SentimentReading {
            SentimentReading {
                compound: self.0,
                ..Default::default()
            }
        }
    }

    fn fallback(compound: f64) -> EmotionResult {
        resolve_with(
            "the bus arrives at noon",
            &EngineConfig::default(),
            &FixedSentiment(compound),
        )
    }

    #[test]
    fn confidence_floors_denominator_at_one() {
        assert_eq!(keyword_confidence(1, 3, 20), 1.0);
        assert_eq!(keyword_confidence(1, 40, 20), 0.5);
        assert_eq!(keyword_confidence(2, 80, 20), 0.5);
        assert_eq!(keyword_confidence(5, 40, 20), 1.0);
        assert_eq!(keyword_confidence(1, 0, 20), 1.0);
    }

    #[test]
    fn fallback_thresholds_are_inclusive() {
        let sad = fallback(-0.3);
        assert_eq!(sad.primary_label, Emotion::Sadness);
        assert!((sad.confidence - 0.3).abs() < 1e-12);
        assert_eq!(sad.all_scores, ScoreMap::single(Emotion::Sadness));

        let hope = fallback(0.3);
        assert_eq!(hope.primary_label, Emotion::Hope);
        assert!((hope.confidence - 0.3).abs() < 1e-12);
        assert_eq!(hope.all_scores, ScoreMap::single(Emotion::Hope));
    }

    #[test]
    fn fallback_middle_band_is_neutral() {
        for compound in [-0.29, 0.0, 0.29] {
            let r = fallback(compound);
            assert_eq!(r.primary_label, Emotion::Neutral);
            assert_eq!(r.confidence, 0.5);
            assert_eq!(r.all_scores, ScoreMap::single(Emotion::Neutral));
        }
    }

    #[test]
    fn strong_fallback_confidence_is_magnitude() {
        let r = fallback(-0.87);
        assert_eq!(r.primary_label, Emotion::Sadness);
        assert!((r.confidence - 0.87).abs() < 1e-12);
    }

    #[test]
    fn sentiment_is_not_consulted_when_keywords_match() {
        let r = resolve_with(
            "I feel anxious",
            &EngineConfig::default(),
            &FixedSentiment(0.99),
        );
        assert_eq!(r.primary_label, Emotion::Anxiety);
    }

    #[test]
    fn summary_ranks_and_flags_mixed() {
        let summary = summarize_with(
            "I am tired, sad and angry about my family",
            &EngineConfig::default(),
            &FixedSentiment(-0.5),
        );
        assert_eq!(summary.emotion_count, 4);
        assert!(summary.is_mixed);
        assert_eq!(summary.primary_label, Emotion::Sadness);
        assert_eq!(summary.sentiment.compound, -0.5);
        let labels: Vec<Emotion> = summary.ranked_scores.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            labels,
            vec![
                Emotion::Sadness,
                Emotion::Exhaustion,
                Emotion::Anger,
                Emotion::FamilyStress,
            ]
        );
    }
}
