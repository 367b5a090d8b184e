//! Rule-based polarity scoring used when no emotion keyword fires.
//!
//! Follows the valence-aware approach of lexicon sentiment tools: each word
//! carries a valence in roughly [-4, 4], adjusted by preceding boosters,
//! negations, ALL-CAPS emphasis and a contrastive "but". The summed valence is
//! squashed into a compound score in [-1, 1].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Empirically derived increment for booster words.
const B_INCR: f64 = 0.293;
const B_DECR: f64 = -0.293;
/// Extra intensity for an ALL-CAPS word in mixed-case text.
const C_INCR: f64 = 0.733;
/// Scalar applied to a valence preceded by a negation.
const N_SCALAR: f64 = -0.74;
/// Normalization constant approximating the max expected summed valence.
const ALPHA: f64 = 15.0;

/// Polarity of one text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentReading {
    /// Overall polarity in [-1, 1].
    pub compound: f64,
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Seam for the fallback polarity estimator.
pub trait SentimentScorer {
    fn name(&self) -> &'static str;
    fn polarity(&self, text: &str) -> SentimentReading;
}

static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        // positive
        ("love", 3.2),
        ("loved", 2.9),
        ("lovely", 2.8),
        ("loving", 2.9),
        ("wonderful", 2.7),
        ("beautiful", 2.9),
        ("amazing", 2.8),
        ("awesome", 3.1),
        ("excellent", 3.2),
        ("fantastic", 2.6),
        ("great", 3.1),
        ("good", 1.9),
        ("nice", 1.8),
        ("fine", 0.8),
        ("happy", 2.7),
        ("happiness", 2.6),
        ("glad", 2.0),
        ("joy", 2.8),
        ("joyful", 2.9),
        ("blessed", 2.9),
        ("proud", 2.1),
        ("strong", 2.3),
        ("safe", 1.9),
        ("support", 1.7),
        ("supported", 1.8),
        ("supportive", 1.9),
        ("kind", 2.4),
        ("care", 2.2),
        ("caring", 2.2),
        ("comfort", 1.5),
        ("comfortable", 1.6),
        ("enjoy", 2.2),
        ("enjoyed", 2.3),
        ("fun", 2.3),
        ("laugh", 2.6),
        ("smile", 1.5),
        ("free", 2.3),
        ("freedom", 3.2),
        ("confident", 2.2),
        ("excited", 1.4),
        ("wow", 2.8),
        ("yes", 1.7),
        ("like", 2.0),
        ("best", 3.2),
        ("win", 2.8),
        ("success", 2.7),
        ("celebrate", 2.7),
        ("beloved", 2.3),
        ("hope", 1.9),
        ("hopeful", 1.6),
        ("better", 1.9),
        ("grateful", 2.0),
        ("thankful", 2.7),
        ("peace", 2.5),
        ("calm", 1.3),
        ("relief", 2.1),
        ("healing", 1.6),
        // negative
        ("bad", -2.5),
        ("terrible", -2.1),
        ("awful", -2.0),
        ("horrible", -2.5),
        ("hate", -2.7),
        ("hated", -3.2),
        ("worst", -3.1),
        ("worse", -2.1),
        ("hurt", -2.4),
        ("hurts", -2.1),
        ("pain", -2.3),
        ("painful", -2.3),
        ("cry", -2.1),
        ("cried", -1.6),
        ("sick", -2.3),
        ("ill", -1.8),
        ("lost", -1.3),
        ("broken", -2.1),
        ("struggle", -1.9),
        ("struggling", -1.4),
        ("hard", -0.4),
        ("difficult", -1.5),
        ("problem", -1.7),
        ("problems", -1.7),
        ("trouble", -1.7),
        ("wrong", -2.1),
        ("fail", -2.5),
        ("failed", -2.3),
        ("upset", -1.6),
        ("unwell", -2.0),
        ("ugly", -2.3),
        ("boring", -1.3),
        ("dull", -1.7),
        ("weak", -1.9),
        ("poor", -2.1),
        ("useless", -1.8),
        ("worthless", -1.9),
        ("disgusting", -2.4),
        ("dreadful", -1.9),
        ("suffer", -2.1),
        ("suffering", -2.1),
        ("ignored", -1.5),
        ("rejected", -2.0),
        ("abandoned", -2.1),
        ("betrayed", -3.0),
        ("no", -1.2),
        ("sad", -2.1),
        ("depressed", -2.3),
        ("lonely", -2.0),
        ("alone", -1.0),
        ("hopeless", -2.0),
        ("miserable", -2.2),
        ("grief", -2.2),
        ("loss", -1.3),
        ("angry", -2.3),
        ("mad", -2.2),
        ("furious", -2.7),
        ("frustrated", -1.5),
        ("afraid", -2.2),
        ("scared", -2.2),
        ("fear", -2.2),
        ("worried", -1.2),
        ("anxious", -1.0),
        ("stress", -1.8),
        ("tired", -1.9),
        ("exhausted", -1.5),
        ("guilty", -1.8),
        ("shame", -2.1),
        ("unfair", -2.1),
        ("heavy", -0.9),
    ])
});

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("absolutely", B_INCR),
        ("completely", B_INCR),
        ("deeply", B_INCR),
        ("extremely", B_INCR),
        ("incredibly", B_INCR),
        ("really", B_INCR),
        ("so", B_INCR),
        ("such", B_INCR),
        ("totally", B_INCR),
        ("truly", B_INCR),
        ("very", B_INCR),
        ("most", B_INCR),
        ("more", B_INCR),
        ("almost", B_DECR),
        ("barely", B_DECR),
        ("hardly", B_DECR),
        ("kinda", B_DECR),
        ("less", B_DECR),
        ("little", B_DECR),
        ("marginally", B_DECR),
        ("slightly", B_DECR),
        ("somewhat", B_DECR),
        ("sort", B_DECR),
    ])
});

const NEGATIONS: &[&str] = &[
    "not", "never", "none", "nope", "nor", "nothing", "nowhere", "neither", "without", "cannot",
    "cant", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "aint", "wont", "wouldnt",
    "shouldnt", "couldnt", "rarely", "seldom", "despite",
];

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.contains("n't")
}

fn is_all_caps(word: &str) -> bool {
    word.chars().any(|c| c.is_alphabetic()) && !word.chars().any(|c| c.is_lowercase())
}

/// Squash a summed valence into [-1, 1].
fn normalize(score: f64) -> f64 {
    let norm = score / (score * score + ALPHA).sqrt();
    norm.clamp(-1.0, 1.0)
}

/// Whitespace tokens with surrounding punctuation removed; single characters dropped.
fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .map(|t| t.trim_matches(|c: char| c.is_ascii_punctuation() && c != '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| t.chars().count() > 1)
        .collect()
}

/// Default lexicon-and-rules polarity scorer.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }

    fn booster_scalar(word: &str, lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(&base) = BOOSTERS.get(lower) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_diff && is_all_caps(word) {
            scalar += if valence > 0.0 { C_INCR } else { -C_INCR };
        }
        scalar
    }

    fn punctuation_emphasis(text: &str) -> f64 {
        let exclamations = text.chars().filter(|c| *c == '!').count().min(4) as f64;
        let questions = text.chars().filter(|c| *c == '?').count();
        let question_amp = match questions {
            0 | 1 => 0.0,
            2 | 3 => questions as f64 * 0.18,
            _ => 0.96,
        };
        exclamations * 0.292 + question_amp
    }

    fn valences(tokens: &[&str]) -> Vec<f64> {
        let lower: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
        let cap_diff = caps > 0 && caps < tokens.len();

        let mut out = Vec::with_capacity(tokens.len());
        for (i, word) in lower.iter().enumerate() {
            if BOOSTERS.contains_key(word.as_str()) {
                out.push(0.0);
                continue;
            }
            if word == "kind" && lower.get(i + 1).is_some_and(|n| n == "of") {
                out.push(0.0);
                continue;
            }
            let Some(&base) = VALENCE.get(word.as_str()) else {
                out.push(0.0);
                continue;
            };

            let mut valence = base;
            if cap_diff && is_all_caps(tokens[i]) {
                valence += if valence > 0.0 { C_INCR } else { -C_INCR };
            }
            for start in 0..3 {
                if i <= start {
                    break;
                }
                let j = i - (start + 1);
                let prev = lower[j].as_str();
                if VALENCE.contains_key(prev) {
                    continue;
                }
                let mut s = Self::booster_scalar(tokens[j], prev, valence, cap_diff);
                if start == 1 {
                    s *= 0.95;
                } else if start == 2 {
                    s *= 0.9;
                }
                valence += s;
                if is_negation(prev) {
                    valence *= N_SCALAR;
                }
            }
            out.push(valence);
        }

        // contrastive "but": downweight what precedes, emphasize what follows
        if let Some(pivot) = lower.iter().position(|w| w == "but") {
            for (i, v) in out.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }
        out
    }

    pub fn score(&self, text: &str) -> SentimentReading {
        let tokens = tokenize(text);
        let sentiments = Self::valences(&tokens);
        if sentiments.is_empty() {
            return SentimentReading::default();
        }

        let punct = Self::punctuation_emphasis(text);
        let mut sum: f64 = sentiments.iter().sum();
        if sum > 0.0 {
            sum += punct;
        } else if sum < 0.0 {
            sum -= punct;
        }
        let compound = normalize(sum);

        let mut pos_sum = 0.0f64;
        let mut neg_sum = 0.0f64;
        let mut neu_count = 0.0f64;
        for s in sentiments.iter() {
            if *s > 0.0 {
                pos_sum += s + 1.0;
            } else if *s < 0.0 {
                neg_sum += s - 1.0;
            } else {
                neu_count += 1.0;
            }
        }
        if pos_sum > neg_sum.abs() {
            pos_sum += punct;
        } else if pos_sum < neg_sum.abs() {
            neg_sum -= punct;
        }
        let total = pos_sum + neg_sum.abs() + neu_count;

        SentimentReading {
            compound: round3(compound),
            positive: round3((pos_sum / total).abs()),
            negative: round3((neg_sum / total).abs()),
            neutral: round3((neu_count / total).abs()),
        }
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

impl SentimentScorer for LexiconSentiment {
    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> SentimentReading {
        self.score(text)
    }
}
