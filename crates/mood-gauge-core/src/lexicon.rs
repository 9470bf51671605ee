//! Weighted indicator lexicon.
//!
//! Two fixed rule sets feed the score accumulator:
//!
//! - [`NEGATIVE_INDICATORS`] raise the score (hopelessness, fatigue, ...).
//! - [`POSITIVE_INDICATORS`] lower it (gratitude, hope, ...).
//!
//! Each rule counts every case-insensitive occurrence of any of its
//! alternatives and contributes `count * weight`. Alternatives are plain
//! substrings, so "down" also fires inside "download".

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::matcher;

/// Which way a rule pushes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Polarity {
    /// Risk-increasing indicator (positive weight).
    Negative,
    /// Protective indicator (negative weight).
    Positive,
}

impl Polarity {
    /// Returns the polarity as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Negative => "negative",
            Self::Positive => "positive",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lexical theme a rule detects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// Hopelessness and despair.
    Hopelessness,
    /// Sadness and low mood.
    Sadness,
    /// Fatigue and low energy.
    Fatigue,
    /// Loneliness and isolation.
    Loneliness,
    /// Sleep disturbance.
    SleepDisturbance,
    /// Anhedonia and apathy.
    Anhedonia,
    /// Self-harm and suicidal ideation.
    SelfHarm,
    /// Guilt and shame.
    Guilt,
    /// Concentration difficulty.
    Concentration,
    /// Psychomotor agitation or retardation.
    Psychomotor,
    /// Happiness and gratitude.
    Happiness,
    /// Hope and anticipation.
    Hope,
    /// Accomplishment and pride.
    Accomplishment,
    /// Energy and motivation.
    Energy,
    /// Social connection and support.
    Connection,
}

impl Theme {
    /// Returns the theme as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hopelessness => "hopelessness",
            Self::Sadness => "sadness",
            Self::Fatigue => "fatigue",
            Self::Loneliness => "loneliness",
            Self::SleepDisturbance => "sleep-disturbance",
            Self::Anhedonia => "anhedonia",
            Self::SelfHarm => "self-harm",
            Self::Guilt => "guilt",
            Self::Concentration => "concentration",
            Self::Psychomotor => "psychomotor",
            Self::Happiness => "happiness",
            Self::Hope => "hope",
            Self::Accomplishment => "accomplishment",
            Self::Energy => "energy",
            Self::Connection => "connection",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A compiled (pattern, weight) pair.
#[derive(Debug, Clone)]
pub struct IndicatorRule {
    /// Theme the rule detects.
    pub theme: Theme,
    /// Direction of the rule's contribution.
    pub polarity: Polarity,
    /// Literal alternatives, in match-priority order.
    pub alternatives: &'static [&'static str],
    /// Score delta per match.
    pub weight: f64,
    pattern: Regex,
}

impl IndicatorRule {
    fn compile(
        theme: Theme,
        polarity: Polarity,
        alternatives: &'static [&'static str],
        weight: f64,
    ) -> Self {
        let pattern = matcher::compile_alternatives(alternatives).expect("valid regex");
        Self {
            theme,
            polarity,
            alternatives,
            weight,
            pattern,
        }
    }

    /// Number of non-overlapping matches of this rule in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        matcher::count_matches(text, &self.pattern)
    }

    /// Serializable description of this rule.
    pub fn summary(&self) -> IndicatorSummary {
        IndicatorSummary {
            theme: self.theme,
            polarity: self.polarity,
            weight: self.weight,
            alternatives: self.alternatives.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Lexicon entry as reported by the CLI and MCP server.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct IndicatorSummary {
    /// Theme the rule detects.
    pub theme: Theme,
    /// Direction of the rule's contribution.
    pub polarity: Polarity,
    /// Score delta per match.
    pub weight: f64,
    /// Literal alternatives.
    pub alternatives: Vec<String>,
}

type RuleSpec = (Theme, &'static [&'static str], f64);

const NEGATIVE_SPECS: &[RuleSpec] = &[
    (
        Theme::Hopelessness,
        &["hopeless", "worthless", "emptiness", "despair"],
        1.5,
    ),
    (
        Theme::Sadness,
        &["sad", "down", "low", "blue", "unhappy"],
        0.8,
    ),
    (
        Theme::Fatigue,
        &["tired", "exhausted", "fatigue", "no energy"],
        0.7,
    ),
    (Theme::Loneliness, &["alone", "lonely", "isolated"], 0.9),
    (
        Theme::SleepDisturbance,
        &["can't sleep", "insomnia", "sleeping too much"],
        0.6,
    ),
    (
        Theme::Anhedonia,
        &["no interest", "don't care", "apathy"],
        1.2,
    ),
    (
        Theme::SelfHarm,
        &["suicide", "death", "dying", "end it"],
        2.5,
    ),
    (Theme::Guilt, &["guilt", "blame", "fault", "shame"], 1.0),
    (
        Theme::Concentration,
        &["can't concentrate", "foggy", "unfocused"],
        0.5,
    ),
    (
        Theme::Psychomotor,
        &["too slow", "agitated", "restless"],
        0.5,
    ),
];

const POSITIVE_SPECS: &[RuleSpec] = &[
    (
        Theme::Happiness,
        &["happy", "joy", "grateful", "thankful"],
        -1.0,
    ),
    (
        Theme::Hope,
        &["hopeful", "looking forward", "excited"],
        -1.2,
    ),
    (
        Theme::Accomplishment,
        &["accomplished", "achieved", "proud"],
        -0.8,
    ),
    (
        Theme::Energy,
        &["energetic", "motivated", "inspired"],
        -0.7,
    ),
    (
        Theme::Connection,
        &["connected", "supported", "loved"],
        -0.9,
    ),
];

fn compile_set(specs: &[RuleSpec], polarity: Polarity) -> Vec<IndicatorRule> {
    specs
        .iter()
        .map(|&(theme, alternatives, weight)| {
            IndicatorRule::compile(theme, polarity, alternatives, weight)
        })
        .collect()
}

/// Risk-increasing rules, all with positive weights.
pub static NEGATIVE_INDICATORS: LazyLock<Vec<IndicatorRule>> =
    LazyLock::new(|| compile_set(NEGATIVE_SPECS, Polarity::Negative));

/// Protective rules, all with negative weights.
pub static POSITIVE_INDICATORS: LazyLock<Vec<IndicatorRule>> =
    LazyLock::new(|| compile_set(POSITIVE_SPECS, Polarity::Positive));

/// Every rule: negative set first, then positive, each in table order.
pub fn all_indicators() -> impl Iterator<Item = &'static IndicatorRule> {
    NEGATIVE_INDICATORS.iter().chain(POSITIVE_INDICATORS.iter())
}

/// Look up the rule for a theme.
pub fn rule_for(theme: Theme) -> Option<&'static IndicatorRule> {
    all_indicators().find(|rule| rule.theme == theme)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn rule_set_sizes() {
        assert_eq!(NEGATIVE_INDICATORS.len(), 10);
        assert_eq!(POSITIVE_INDICATORS.len(), 5);
    }

    #[test]
    fn negative_weights_are_positive() {
        for rule in NEGATIVE_INDICATORS.iter() {
            assert!(rule.weight > 0.0, "{} has weight {}", rule.theme, rule.weight);
            assert_eq!(rule.polarity, Polarity::Negative);
        }
    }

    #[test]
    fn positive_weights_are_negative() {
        for rule in POSITIVE_INDICATORS.iter() {
            assert!(rule.weight < 0.0, "{} has weight {}", rule.theme, rule.weight);
            assert_eq!(rule.polarity, Polarity::Positive);
        }
    }

    #[test]
    fn themes_are_unique() {
        let themes: HashSet<Theme> = all_indicators().map(|r| r.theme).collect();
        assert_eq!(themes.len(), 15);
    }

    #[test]
    fn documented_weights() {
        let expect = [
            (Theme::Hopelessness, 1.5),
            (Theme::Sadness, 0.8),
            (Theme::Fatigue, 0.7),
            (Theme::Loneliness, 0.9),
            (Theme::SleepDisturbance, 0.6),
            (Theme::Anhedonia, 1.2),
            (Theme::SelfHarm, 2.5),
            (Theme::Guilt, 1.0),
            (Theme::Concentration, 0.5),
            (Theme::Psychomotor, 0.5),
            (Theme::Happiness, -1.0),
            (Theme::Hope, -1.2),
            (Theme::Accomplishment, -0.8),
            (Theme::Energy, -0.7),
            (Theme::Connection, -0.9),
        ];
        for (theme, weight) in expect {
            let rule = rule_for(theme).unwrap();
            assert!((rule.weight - weight).abs() < f64::EPSILON, "{theme}");
        }
    }

    #[test]
    fn every_alternative_matches_its_own_rule() {
        for rule in all_indicators() {
            for alt in rule.alternatives {
                assert!(rule.count_in(alt) >= 1, "{alt} should match {}", rule.theme);
            }
        }
    }

    #[test]
    fn alternatives_are_ascii() {
        for rule in all_indicators() {
            for alt in rule.alternatives {
                assert!(alt.is_ascii(), "{alt:?} in {} is not ASCII", rule.theme);
            }
        }
    }

    #[test]
    fn non_ascii_look_alikes_do_not_match() {
        let sadness = rule_for(Theme::Sadness).unwrap();
        assert_eq!(sadness.count_in("\u{17F}ad and unhappy"), 1);
    }

    #[test]
    fn multi_word_alternatives() {
        let fatigue = rule_for(Theme::Fatigue).unwrap();
        assert_eq!(fatigue.count_in("I have No Energy at all"), 1);
        let hope = rule_for(Theme::Hope).unwrap();
        assert_eq!(hope.count_in("Looking forward to it"), 1);
    }

    #[test]
    fn unhappy_also_counts_as_happy() {
        let sadness = rule_for(Theme::Sadness).unwrap();
        let happiness = rule_for(Theme::Happiness).unwrap();
        assert_eq!(sadness.count_in("unhappy"), 1);
        assert_eq!(happiness.count_in("unhappy"), 1);
    }

    #[test]
    fn summary_lists_alternatives() {
        let summary = rule_for(Theme::SelfHarm).unwrap().summary();
        assert_eq!(summary.polarity, Polarity::Negative);
        assert_eq!(summary.alternatives, vec!["suicide", "death", "dying", "end it"]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["theme"], "self-harm");
        assert_eq!(json["polarity"], "negative");
    }
}
