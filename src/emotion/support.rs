//! Support types suggested for each emotion, most emphasized first.

use super::category::Emotion;

/// Returned for neutral or unrecognized labels.
pub const DEFAULT_SUPPORT: &[&str] = &["One-on-one coaching", "Virtual group circles"];

pub fn support_for(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Anxiety => &[
            "Virtual group circles",
            "Meditation & breathwork",
            "One-on-one coaching",
            "Somatic practices",
        ],
        Emotion::Sadness => &[
            "One-on-one coaching",
            "Art/creative therapy",
            "Spiritual/faith-rooted support",
            "Support groups",
        ],
        Emotion::Exhaustion => &[
            "Massage/bodywork",
            "Quiet self-study resources",
            "Rest & restoration workshops",
            "Boundary-setting coaching",
        ],
        Emotion::Guilt => &[
            "One-on-one coaching",
            "Virtual group circles",
            "Cultural healing circles",
            "Journaling prompts",
        ],
        Emotion::Anger => &[
            "One-on-one coaching",
            "Movement/somatic practices",
            "Art/creative therapy",
            "Assertiveness training",
        ],
        Emotion::Hope => &[
            "Growth & empowerment groups",
            "Skill-building workshops",
            "Community celebrations",
            "Mentorship programs",
        ],
        Emotion::Overwhelm => &[
            "Stress management workshops",
            "Time management coaching",
            "Boundary-setting support",
            "Self-care planning",
        ],
        Emotion::FamilyStress => &[
            "Cultural healing circles",
            "Family dynamics coaching",
            "Boundary-setting workshops",
            "Intergenerational healing",
        ],
        Emotion::Neutral => DEFAULT_SUPPORT,
    }
}

/// Ranked support types for a label string. Never empty.
pub fn recommend(label: &str) -> &'static [&'static str] {
    label
        .parse::<Emotion>()
        .map(support_for)
        .unwrap_or(DEFAULT_SUPPORT)
}
