//! Human-readable, localized emotion labels.

use super::category::Emotion;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" => Ok(Language::Spanish),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}

fn english(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxiety => "😰 Anxiety/Worry",
        Emotion::Sadness => "😢 Sadness",
        Emotion::Exhaustion => "😴 Exhaustion/Burnout",
        Emotion::Guilt => "😔 Guilt/Shame",
        Emotion::Anger => "😤 Anger/Frustration",
        Emotion::Hope => "🌟 Hope/Positivity",
        Emotion::Overwhelm => "🌊 Overwhelm",
        Emotion::FamilyStress => "👨‍👩‍👧‍👦 Family Stress",
        Emotion::Neutral => "😌 Neutral",
    }
}

fn spanish(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anxiety => "😰 Ansiedad/Preocupación",
        Emotion::Sadness => "😢 Tristeza",
        Emotion::Exhaustion => "😴 Agotamiento/Burnout",
        Emotion::Guilt => "😔 Culpa/Vergüenza",
        Emotion::Anger => "😤 Enojo/Frustración",
        Emotion::Hope => "🌟 Esperanza/Positividad",
        Emotion::Overwhelm => "🌊 Abrumada",
        Emotion::FamilyStress => "👨‍👩‍👧‍👦 Estrés Familiar",
        Emotion::Neutral => "😌 Neutral",
    }
}

pub fn label_for(emotion: Emotion, lang: Language) -> &'static str {
    match lang {
        Language::English => english(emotion),
        Language::Spanish => spanish(emotion),
    }
}

/// Display text for a stored label; unknown labels are title-cased.
pub fn display_label(label: &str, lang: Language) -> Cow<'static, str> {
    match label.parse::<Emotion>() {
        Ok(emotion) => Cow::Borrowed(label_for(emotion, lang)),
        Err(_) => Cow::Owned(title_case(label)),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
