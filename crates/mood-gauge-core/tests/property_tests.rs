//! Property-based tests for the scoring pipeline.
//!
//! Verifies that normalized scores stay on the 0-25 scale for arbitrary
//! text, that adding indicator matches moves the raw score in the expected
//! direction, and that normalization and banding are well-behaved.

use mood_gauge_core::lexicon::{
    IndicatorRule, NEGATIVE_INDICATORS, POSITIVE_INDICATORS, all_indicators,
};
use mood_gauge_core::{
    Band, SentimentJudgment, SentimentLabel, assess, compute_score, normalize, score_breakdown,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_sentiment() -> impl Strategy<Value = SentimentJudgment> {
    (any::<bool>(), 0.0f64..=1.0).prop_map(|(negative, confidence)| {
        let label = if negative {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };
        SentimentJudgment::new(label, confidence).unwrap()
    })
}

const VOCABULARY: &[&str] = &[
    "I", "feel", "today", "and", "but", "the", "work", "friends", "hopeless", "sad", "tired",
    "alone", "insomnia", "apathy", "guilt", "foggy", "restless", "happy", "grateful", "hopeful",
    "proud", "motivated", "loved", "download", "unhappy", "can't sleep", "looking forward",
];

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|w| w.join(" ")),
        "\\PC{0,200}",
    ]
}

/// Alternatives of `rule` that match no other rule, so appending one changes
/// exactly one count.
fn isolated_alternatives(rule: &IndicatorRule) -> Vec<&'static str> {
    rule.alternatives
        .iter()
        .copied()
        .filter(|alt| {
            all_indicators()
                .filter(|other| other.theme != rule.theme)
                .all(|other| other.count_in(alt) == 0)
        })
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn normalized_score_stays_on_scale(text in arb_text(), sentiment in arb_sentiment()) {
        let score = normalize(compute_score(&text, &sentiment));
        prop_assert!((0.0..=25.0).contains(&score), "score = {}", score);
    }

    #[test]
    fn assess_agrees_with_pipeline(text in arb_text(), sentiment in arb_sentiment()) {
        let result = assess(&text, &sentiment);
        let raw = compute_score(&text, &sentiment);
        prop_assert_eq!(result.raw_score, raw);
        prop_assert_eq!(result.normalized_score, normalize(raw));
        prop_assert_eq!(result.band, Band::from_score(result.normalized_score));
        prop_assert_eq!(result.interpretation, result.band.label());
    }

    #[test]
    fn breakdown_reproduces_raw_score(text in arb_text(), sentiment in arb_sentiment()) {
        let breakdown = score_breakdown(&text, &sentiment);
        prop_assert_eq!(breakdown.raw_score, compute_score(&text, &sentiment));
        for c in &breakdown.contributions {
            prop_assert!(c.matches > 0);
        }
    }

    #[test]
    fn negative_matches_never_lower_raw_score(
        text in arb_text(),
        sentiment in arb_sentiment(),
        rule_idx in 0usize..10,
        pick in any::<prop::sample::Index>(),
    ) {
        let rule = &NEGATIVE_INDICATORS[rule_idx];
        let alts = isolated_alternatives(rule);
        prop_assume!(!alts.is_empty());
        let alt = alts[pick.index(alts.len())];

        let before = compute_score(&text, &sentiment);
        let after = compute_score(&format!("{text}. {alt}"), &sentiment);
        prop_assert!(after >= before, "{} -> {} after adding {:?}", before, after, alt);
    }

    #[test]
    fn positive_matches_never_raise_raw_score(
        text in arb_text(),
        sentiment in arb_sentiment(),
        rule_idx in 0usize..5,
        pick in any::<prop::sample::Index>(),
    ) {
        let rule = &POSITIVE_INDICATORS[rule_idx];
        let alts = isolated_alternatives(rule);
        prop_assume!(!alts.is_empty());
        let alt = alts[pick.index(alts.len())];

        let before = compute_score(&text, &sentiment);
        let after = compute_score(&format!("{text}. {alt}"), &sentiment);
        prop_assert!(after <= before, "{} -> {} after adding {:?}", before, after, alt);
    }

    #[test]
    fn normalize_is_idempotent(x in prop_oneof![-1.0e6f64..1.0e6, -5.0f64..30.0, any::<f64>()]) {
        let once = normalize(x);
        prop_assert_eq!(normalize(once), once);
    }

    #[test]
    fn normalize_output_has_one_decimal(x in -10.0f64..40.0) {
        let score = normalize(x);
        let tenths = score * 10.0;
        prop_assert!((tenths - tenths.round()).abs() < 1e-9, "score = {}", score);
    }

    #[test]
    fn every_score_has_exactly_one_band(score in 0.0f64..=25.0) {
        let matching = Band::ALL
            .iter()
            .filter(|band| {
                let lower = band.lower_bound();
                let upper = lower + 5.0;
                score >= lower && (score < upper || (**band == Band::Severe && score <= 25.0))
            })
            .count();
        prop_assert_eq!(matching, 1);
    }
}

#[test]
fn every_rule_has_an_isolated_alternative() {
    for rule in all_indicators() {
        assert!(
            !isolated_alternatives(rule).is_empty(),
            "{} has no alternative free of cross-matches",
            rule.theme
        );
    }
}
