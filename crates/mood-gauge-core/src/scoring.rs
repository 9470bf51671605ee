//! Raw score accumulation.
//!
//! ```text
//! raw = 12.5
//!     + sentiment contribution             (-5 ..= +5)
//!     + sum(count(rule) * weight)          negative indicators
//!     + sum(count(rule) * weight)          positive indicators
//! ```
//!
//! Terms are added in that order, rules in lexicon order. The result is
//! unclamped; see [`crate::normalize`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::lexicon::{IndicatorRule, NEGATIVE_INDICATORS, POSITIVE_INDICATORS, Polarity, Theme};
use crate::sentiment::SentimentJudgment;

/// Starting point: midpoint of the 0-25 scale.
pub const BASELINE: f64 = 12.5;

/// Score contribution of a single matched rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Contribution {
    /// Theme of the rule.
    pub theme: Theme,
    /// Direction of the rule.
    pub polarity: Polarity,
    /// Number of matches in the text.
    pub matches: usize,
    /// Weight per match.
    pub weight: f64,
    /// `matches * weight`.
    pub contribution: f64,
}

/// Itemized raw score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBreakdown {
    /// The baseline constant.
    pub baseline: f64,
    /// Signed sentiment term.
    pub sentiment: f64,
    /// Matched rules, negative set first, in lexicon order.
    pub contributions: Vec<Contribution>,
    /// Unclamped total.
    pub raw_score: f64,
}

impl ScoreBreakdown {
    /// Total matches across all rules.
    pub fn total_matches(&self) -> usize {
        self.contributions.iter().map(|c| c.matches).sum()
    }
}

/// Compute the unclamped raw score for `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len(), label = %sentiment.label()))]
pub fn compute_score(text: &str, sentiment: &SentimentJudgment) -> f64 {
    accumulate(text, sentiment, |_, _, _| {})
}

/// Compute the raw score and record every rule that matched.
#[tracing::instrument(skip(text), fields(text_len = text.len(), label = %sentiment.label()))]
pub fn score_breakdown(text: &str, sentiment: &SentimentJudgment) -> ScoreBreakdown {
    let mut contributions = Vec::new();
    let raw_score = accumulate(text, sentiment, |rule, matches, contribution| {
        if matches > 0 {
            contributions.push(Contribution {
                theme: rule.theme,
                polarity: rule.polarity,
                matches,
                weight: rule.weight,
                contribution,
            });
        }
    });

    ScoreBreakdown {
        baseline: BASELINE,
        sentiment: sentiment.contribution(),
        contributions,
        raw_score,
    }
}

fn accumulate(
    text: &str,
    sentiment: &SentimentJudgment,
    mut on_rule: impl FnMut(&IndicatorRule, usize, f64),
) -> f64 {
    let start = BASELINE + sentiment.contribution();
    let score = apply_rules(start, text, &NEGATIVE_INDICATORS, &mut on_rule);
    apply_rules(score, text, &POSITIVE_INDICATORS, &mut on_rule)
}

fn apply_rules(
    score: f64,
    text: &str,
    rules: &[IndicatorRule],
    on_rule: &mut impl FnMut(&IndicatorRule, usize, f64),
) -> f64 {
    rules.iter().fold(score, |acc, rule| {
        let matches = rule.count_in(text);
        let contribution = matches as f64 * rule.weight;
        if matches > 0 {
            debug!(theme = %rule.theme, matches, contribution, "indicator matched");
        }
        on_rule(rule, matches, contribution);
        acc + contribution
    })
}
