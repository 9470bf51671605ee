//! Error types for mood-gauge-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when a sentiment judgment violates its input contract.
///
/// Scoring itself never fails; these are only produced while building a
/// [`SentimentJudgment`](crate::sentiment::SentimentJudgment).
#[derive(Error, Debug, PartialEq)]
pub enum SentimentError {
    /// The classifier label is not one of the recognized values.
    #[error("unknown sentiment label: {label:?}. Use: POSITIVE, NEGATIVE")]
    UnknownLabel {
        /// The label that was supplied.
        label: String,
    },

    /// Confidence is NaN, infinite, or outside `[0, 1]`.
    #[error("sentiment confidence must be within [0, 1], got {value}")]
    ConfidenceOutOfRange {
        /// The rejected confidence value.
        value: f64,
    },

    /// The classifier output document could not be parsed.
    #[error("malformed sentiment document: {0}")]
    Malformed(String),
}

/// Result type alias using [`SentimentError`].
pub type SentimentResult<T> = Result<T, SentimentError>;
