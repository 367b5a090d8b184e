//! Keyword triggers per emotion category.
//!
//! Phrases are lowercase and matched as substrings of the normalized text,
//! so `overwhelm` also fires inside `overwhelmed`. Several categories share
//! triggers on purpose (anxiety and overwhelm both list `overwhelm`).

use super::category::Emotion;

pub const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "worry",
    "nervous",
    "panic",
    "overwhelm",
    "overwhelmed",
    "scared",
    "fear",
    "afraid",
    "stress",
    "tense",
    "restless",
    "on edge",
];

pub const SADNESS_KEYWORDS: &[&str] = &[
    "sad",
    "sadness",
    "depressed",
    "depression",
    "down",
    "low",
    "unhappy",
    "miserable",
    "crying",
    "tears",
    "hopeless",
    "empty",
    "lonely",
    "alone",
    "isolated",
    "grief",
    "loss",
];

pub const EXHAUSTION_KEYWORDS: &[&str] = &[
    "exhausted",
    "tired",
    "fatigue",
    "drained",
    "worn out",
    "burnout",
    "burned out",
    "depleted",
    "weary",
    "sleep",
    "sleepless",
    "overworked",
    "no energy",
    "cant keep up",
    "can't keep up",
];

pub const GUILT_KEYWORDS: &[&str] = &[
    "guilt",
    "guilty",
    "shame",
    "ashamed",
    "should",
    "shouldnt",
    "bad mother",
    "bad daughter",
    "not enough",
    "failing",
    "selfish",
    "let down",
    "disappointed",
];

pub const ANGER_KEYWORDS: &[&str] = &[
    "angry",
    "anger",
    "mad",
    "furious",
    "frustrated",
    "frustration",
    "irritated",
    "annoyed",
    "resentful",
    "resentment",
    "bitter",
    "unfair",
    "fed up",
];

pub const HOPE_KEYWORDS: &[&str] = &[
    "hope",
    "hopeful",
    "better",
    "improve",
    "healing",
    "growth",
    "trying",
    "working on",
    "learning",
    "grateful",
    "thankful",
    "peace",
    "calm",
    "relief",
];

pub const OVERWHELM_KEYWORDS: &[&str] = &[
    "overwhelm",
    "overwhelmed",
    "too much",
    "cant handle",
    "can't handle",
    "drowning",
    "suffocating",
    "pressure",
    "burden",
    "heavy",
    "juggling",
    "everything",
    "all at once",
];

pub const FAMILY_STRESS_KEYWORDS: &[&str] = &[
    "family",
    "mother",
    "daughter",
    "sister",
    "abuela",
    "mama",
    "expectations",
    "tradition",
    "cultural",
    "obligations",
    "take care",
    "caretaker",
    "caregiving",
    "responsible for everyone",
];

/// Categories with their triggers, in definition order.
pub static EMOTION_KEYWORDS: [(Emotion, &[&str]); 8] = [
    (Emotion::Anxiety, ANXIETY_KEYWORDS),
    (Emotion::Sadness, SADNESS_KEYWORDS),
    (Emotion::Exhaustion, EXHAUSTION_KEYWORDS),
    (Emotion::Guilt, GUILT_KEYWORDS),
    (Emotion::Anger, ANGER_KEYWORDS),
    (Emotion::Hope, HOPE_KEYWORDS),
    (Emotion::Overwhelm, OVERWHELM_KEYWORDS),
    (Emotion::FamilyStress, FAMILY_STRESS_KEYWORDS),
];

/// Triggers for one category. `Neutral` has none.
pub fn triggers_for(emotion: Emotion) -> &'static [&'static str] {
    EMOTION_KEYWORDS
        .iter()
        .find(|(e, _)| *e == emotion)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}
