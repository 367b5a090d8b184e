use proptest::prelude::*;
use voces_calma::emotion::lexicon::triggers_for;
use voces_calma::emotion::scorer::score;
use voces_calma::{Emotion, ScoreMap, resolve, summarize_text};

const FILLER: &[&str] = &[
    "the", "bus", "arrives", "at", "noon", "we", "walk", "to", "market", "today",
];

/// Triggers that score only for their own category.
fn exclusive_triggers(emotion: Emotion) -> Vec<&'static str> {
    triggers_for(emotion)
        .iter()
        .copied()
        .filter(|t| score(t).iter().all(|(e, _)| e == emotion))
        .collect()
}

#[test]
fn empty_text_is_neutral() {
    let r = resolve("");
    assert_eq!(r.primary_label, Emotion::Neutral);
    assert_eq!(r.confidence, 0.5);
    assert_eq!(r.all_scores, ScoreMap::single(Emotion::Neutral));
}

#[test]
fn short_text_saturates_confidence() {
    let r = resolve("I feel anxious");
    assert_eq!(r.primary_label, Emotion::Anxiety);
    assert_eq!(r.confidence, 1.0);
    assert_eq!(r.all_scores.get(Emotion::Anxiety), 1);
}

#[test]
fn tied_counts_go_to_the_earliest_category() {
    let r = resolve("I feel so overwhelmed by family expectations. Everyone needs something from me.");
    assert_eq!(r.all_scores.get(Emotion::Anxiety), 2);
    assert_eq!(r.all_scores.get(Emotion::Overwhelm), 2);
    assert_eq!(r.all_scores.get(Emotion::FamilyStress), 2);
    assert_eq!(r.all_scores.len(), 3);
    assert_eq!(r.primary_label, Emotion::Anxiety);
    assert_eq!(r.confidence, 1.0);
}

#[test]
fn strictly_higher_count_wins_regardless_of_order() {
    let r = resolve("Family expectations and my mother's obligations are too much.");
    assert_eq!(r.all_scores.get(Emotion::FamilyStress), 4);
    assert_eq!(r.all_scores.get(Emotion::Overwhelm), 1);
    assert_eq!(r.primary_label, Emotion::FamilyStress);
}

#[test]
fn long_text_dilutes_confidence() {
    let mut text = String::from("I feel selfish");
    for _ in 0..37 {
        text.push_str(" today");
    }
    // 40 words, one hit: 1 / (40 / 20)
    let r = resolve(&text);
    assert_eq!(r.primary_label, Emotion::Guilt);
    assert_eq!(r.confidence, 0.5);
}

#[test]
fn sentiment_fallback_routes_polarity() {
    let positive = resolve("What a wonderful, beautiful day. I love it!");
    assert_eq!(positive.primary_label, Emotion::Hope);
    assert!(positive.confidence >= 0.3);
    assert_eq!(positive.all_scores, ScoreMap::single(Emotion::Hope));

    let negative = resolve("This is terrible and awful, I hate it.");
    assert_eq!(negative.primary_label, Emotion::Sadness);
    assert!(negative.confidence >= 0.3);
    assert_eq!(negative.all_scores, ScoreMap::single(Emotion::Sadness));

    let flat = resolve("The bus arrives at noon.");
    assert_eq!(flat.primary_label, Emotion::Neutral);
    assert_eq!(flat.confidence, 0.5);
}

#[test]
fn detail_summary_for_a_story() {
    let summary = summarize_text("I feel guilty for wanting time for myself instead of always being there for others.");
    assert_eq!(summary.primary_label, Emotion::Guilt);
    assert_eq!(summary.confidence, 1.0);
    assert_eq!(summary.ranked_scores, vec![(Emotion::Guilt, 2)]);
    assert_eq!(summary.emotion_count, 1);
    assert!(!summary.is_mixed);
}

#[test]
fn every_category_is_reachable() {
    for emotion in Emotion::DETECTABLE {
        let triggers = exclusive_triggers(emotion);
        assert!(!triggers.is_empty(), "{} has no exclusive trigger", emotion);
        assert_eq!(resolve(triggers[0]).primary_label, emotion);
    }
}

proptest! {
    #[test]
    fn confidence_stays_in_unit_range(text in "\\PC{0,300}") {
        let r = resolve(&text);
        prop_assert!((0.0..=1.0).contains(&r.confidence));
        prop_assert!(!r.all_scores.is_empty());
    }

    #[test]
    fn resolution_is_deterministic(text in "[a-zA-Z ,.!?']{0,200}") {
        let a = resolve(&text);
        let b = resolve(&text);
        prop_assert_eq!(a.primary_label, b.primary_label);
        prop_assert_eq!(a.confidence.to_bits(), b.confidence.to_bits());
        prop_assert_eq!(a.all_scores, b.all_scores);
    }

    #[test]
    fn single_category_text_resolves_to_that_category(
        cat in 0usize..8,
        picks in prop::collection::vec(0usize..64, 1..4),
        filler in prop::collection::vec(0usize..FILLER.len(), 0..40),
    ) {
        let emotion = Emotion::DETECTABLE[cat];
        let triggers = exclusive_triggers(emotion);
        let mut words: Vec<&str> = filler.iter().map(|i| FILLER[*i]).collect();
        for (n, pick) in picks.iter().enumerate() {
            let at = (n * 7) % (words.len() + 1);
            words.insert(at, triggers[pick % triggers.len()]);
        }
        let text = words.join(" ");
        let r = resolve(&text);
        prop_assert_eq!(r.primary_label, emotion, "text: {}", text);
    }
}
