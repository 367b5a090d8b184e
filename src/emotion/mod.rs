//! Emotion detection engine: keyword lexicon, sentiment fallback, batch
//! statistics and support recommendations.
//! Deterministic and stateless; safe to share across threads.

pub mod aggregate;
pub mod category;
pub mod display;
pub mod lexicon;
pub mod resolver;
pub mod scorer;
pub mod sentiment;
pub mod support;

use crate::config::EngineConfig;
use aggregate::BatchSummary;
use once_cell::sync::Lazy;
use resolver::{EmotionResult, EmotionSummary};
use sentiment::{LexiconSentiment, SentimentScorer};
use std::sync::Arc;

/// Resolves stories to emotions under one set of tuning values.
#[derive(Clone)]
pub struct EmotionEngine {
    config: EngineConfig,
    sentiment: Arc<dyn SentimentScorer + Send + Sync>,
}

static DEFAULT_ENGINE: Lazy<EmotionEngine> = Lazy::new(EmotionEngine::new);

impl Default for EmotionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            sentiment: Arc::new(LexiconSentiment::new()),
        }
    }

    /// Swap the fallback polarity scorer.
    pub fn with_sentiment(mut self, scorer: Arc<dyn SentimentScorer + Send + Sync>) -> Self {
        self.sentiment = scorer;
        self
    }

    /// Shared engine with default tuning.
    pub fn shared() -> &'static EmotionEngine {
        &DEFAULT_ENGINE
    }

    pub fn resolve(&self, text: &str) -> EmotionResult {
        resolver::resolve_with(text, &self.config, self.sentiment.as_ref())
    }

    pub fn summarize_text(&self, text: &str) -> EmotionSummary {
        resolver::summarize_with(text, &self.config, self.sentiment.as_ref())
    }

    pub fn analyze_batch<I, S>(&self, texts: I) -> BatchSummary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let results: Vec<EmotionResult> = texts
            .into_iter()
            .map(|t| self.resolve(t.as_ref()))
            .collect();
        tracing::debug!(items = results.len(), "batch resolved");
        aggregate::summarize(&results)
    }
}
