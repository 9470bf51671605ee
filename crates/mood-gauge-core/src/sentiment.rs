//! External sentiment judgments.
//!
//! A [`SentimentJudgment`] is the `{label, confidence}` pair produced by an
//! upstream binary sentiment classifier. Construction validates the contract,
//! so every judgment that reaches the scorer is well-formed.
//!
//! Classifier output documents are accepted in two shapes:
//!
//! ```json
//! {"label": "NEGATIVE", "score": 0.93}
//! ```
//!
//! or a list of per-label scores, from which the highest-scoring entry wins:
//!
//! ```json
//! [{"label": "NEGATIVE", "score": 0.93}, {"label": "POSITIVE", "score": 0.07}]
//! ```
//!
//! `confidence` is accepted as an alias for `score`.

use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{SentimentError, SentimentResult};

/// Multiplier applied to confidence to get the score contribution.
pub const SENTIMENT_SCALE: f64 = 5.0;

/// Classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SentimentLabel {
    /// Positive sentiment; lowers the score.
    #[serde(alias = "positive")]
    Positive,
    /// Negative sentiment; raises the score.
    #[serde(alias = "negative")]
    Negative,
}

impl SentimentLabel {
    /// Returns the label in the classifier's uppercase spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SentimentLabel {
    type Err = SentimentError;

    /// Parse a label, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("POSITIVE") {
            Ok(Self::Positive)
        } else if trimmed.eq_ignore_ascii_case("NEGATIVE") {
            Ok(Self::Negative)
        } else {
            Err(SentimentError::UnknownLabel {
                label: s.to_string(),
            })
        }
    }
}

/// A validated sentiment judgment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawJudgment")]
pub struct SentimentJudgment {
    label: SentimentLabel,
    confidence: f64,
}

impl SentimentJudgment {
    /// Build a judgment, rejecting confidence outside `[0, 1]`.
    pub fn new(label: SentimentLabel, confidence: f64) -> SentimentResult<Self> {
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(SentimentError::ConfidenceOutOfRange { value: confidence });
        }
        Ok(Self { label, confidence })
    }

    /// Build a judgment from a textual label.
    pub fn parse(label: &str, confidence: f64) -> SentimentResult<Self> {
        Self::new(label.parse()?, confidence)
    }

    /// Parse a classifier output document (object or list of objects).
    pub fn from_json(doc: &str) -> SentimentResult<Self> {
        let parsed: ClassifierOutput =
            serde_json::from_str(doc).map_err(|e| SentimentError::Malformed(e.to_string()))?;
        match parsed {
            ClassifierOutput::Single(raw) => Self::try_from(raw),
            ClassifierOutput::Ranked(entries) => entries
                .into_iter()
                .max_by(|a, b| a.score.total_cmp(&b.score))
                .ok_or_else(|| SentimentError::Malformed("empty classifier output".to_string()))
                .and_then(Self::try_from),
        }
    }

    /// The classifier label.
    pub const fn label(&self) -> SentimentLabel {
        self.label
    }

    /// The classifier confidence, within `[0, 1]`.
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Signed score delta: `+confidence * 5` for NEGATIVE, `-confidence * 5`
    /// for POSITIVE.
    pub fn contribution(&self) -> f64 {
        let magnitude = self.confidence * SENTIMENT_SCALE;
        match self.label {
            SentimentLabel::Negative => magnitude,
            SentimentLabel::Positive => -magnitude,
        }
    }
}

/// Unvalidated wire form of a judgment.
#[derive(Debug, Deserialize)]
struct RawJudgment {
    label: String,
    #[serde(alias = "confidence")]
    score: f64,
}

impl TryFrom<RawJudgment> for SentimentJudgment {
    type Error = SentimentError;

    fn try_from(raw: RawJudgment) -> Result<Self, Self::Error> {
        Self::parse(&raw.label, raw.score)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassifierOutput {
    Single(RawJudgment),
    Ranked(Vec<RawJudgment>),
}
