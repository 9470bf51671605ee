//! Core library for mood-gauge.
//!
//! Derives a bounded depression-indicator score (0-25) from a block of text
//! and an external sentiment judgment, then maps it to a severity band.
//!
//! # Modules
//!
//! - [`lexicon`] - Weighted indicator rules
//! - [`matcher`] - Case-insensitive pattern counting
//! - [`scoring`] - Raw score accumulation and breakdowns
//! - [`normalize`] - Rounding and clamping into `[0, 25]`
//! - [`interpret`] - Severity bands
//! - [`sentiment`] - Validated classifier judgments
//! - [`assessment`] - The end-to-end operation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use mood_gauge_core::{SentimentJudgment, SentimentLabel, assess};
//!
//! let sentiment = SentimentJudgment::new(SentimentLabel::Negative, 0.9).unwrap();
//! let result = assess("I feel hopeless and worthless", &sentiment);
//!
//! assert_eq!(result.normalized_score, 20.0);
//! assert_eq!(result.interpretation, "Severe depression indicators detected");
//! ```
#![deny(unsafe_code)]

pub mod assessment;
pub mod config;
pub mod error;
pub mod interpret;
pub mod lexicon;
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod sentiment;

pub use assessment::{Assessment, ScoreResult, assess};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, SentimentError, SentimentResult};
pub use interpret::{Band, interpret};
pub use normalize::normalize;
pub use scoring::{ScoreBreakdown, compute_score, score_breakdown};
pub use sentiment::{SentimentJudgment, SentimentLabel};

/// Default maximum input size: 5 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
