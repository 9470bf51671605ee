//! End-to-end assessment: text + sentiment -> score + interpretation.

use serde::Serialize;
use tracing::info;

use crate::interpret::Band;
use crate::normalize::normalize;
use crate::scoring::{self, ScoreBreakdown};
use crate::sentiment::SentimentJudgment;

/// Outcome of scoring one text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Unclamped, unrounded score.
    pub raw_score: f64,
    /// Rounded to one decimal and clamped into `[0, 25]`.
    pub normalized_score: f64,
    /// Severity band of `normalized_score`.
    pub band: Band,
    /// Label of `band`.
    pub interpretation: &'static str,
}

impl ScoreResult {
    fn from_raw(raw_score: f64) -> Self {
        let normalized_score = normalize(raw_score);
        let band = Band::from_score(normalized_score);
        Self {
            raw_score,
            normalized_score,
            band,
            interpretation: band.label(),
        }
    }
}

/// Score `text` against the lexicon and the supplied sentiment.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn assess(text: &str, sentiment: &SentimentJudgment) -> ScoreResult {
    let result = ScoreResult::from_raw(scoring::compute_score(text, sentiment));
    info!(
        score = result.normalized_score,
        band = %result.band,
        "assessment completed"
    );
    result
}

/// Serializable assessment document.
///
/// Serialized with camelCase keys: `extractedText`, `depressionScore`,
/// `scoreOutOf25`, `interpretations`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    /// The text that was scored.
    pub extracted_text: String,
    /// Normalized score.
    pub depression_score: f64,
    /// Same value as `depression_score`.
    pub score_out_of_25: f64,
    /// Interpretation label.
    pub interpretations: String,
    /// Unclamped score.
    pub raw_score: f64,
    /// Severity band.
    pub band: Band,
    /// Sentiment judgment that was applied.
    pub sentiment: SentimentJudgment,
    /// Per-rule contributions, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl Assessment {
    /// Assess `text` and build the document.
    ///
    /// With `with_breakdown`, the itemized contributions are included and the
    /// score is derived from them.
    #[tracing::instrument(skip(text), fields(text_len = text.len()))]
    pub fn build(text: &str, sentiment: &SentimentJudgment, with_breakdown: bool) -> Self {
        let (result, breakdown) = if with_breakdown {
            let breakdown = scoring::score_breakdown(text, sentiment);
            (ScoreResult::from_raw(breakdown.raw_score), Some(breakdown))
        } else {
            (assess(text, sentiment), None)
        };

        Self {
            extracted_text: text.to_string(),
            depression_score: result.normalized_score,
            score_out_of_25: result.normalized_score,
            interpretations: result.interpretation.to_string(),
            raw_score: result.raw_score,
            band: result.band,
            sentiment: *sentiment,
            breakdown,
        }
    }

}
