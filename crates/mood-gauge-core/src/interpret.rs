//! Severity bands.
//!
//! | Range      | Band                 |
//! |------------|----------------------|
//! | `[0, 5)`   | [`Band::Minimal`]    |
//! | `[5, 10)`  | [`Band::Mild`]       |
//! | `[10, 15)` | [`Band::Moderate`]   |
//! | `[15, 20)` | [`Band::ModeratelySevere`] |
//! | `[20, 25]` | [`Band::Severe`]     |
//!
//! Lower bounds are inclusive. Values outside `[0, 25]` fall into the
//! nearest end band, and NaN falls into [`Band::Minimal`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One of five fixed severity ranges.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Band {
    /// `[0, 5)`
    Minimal,
    /// `[5, 10)`
    Mild,
    /// `[10, 15)`
    Moderate,
    /// `[15, 20)`
    ModeratelySevere,
    /// `[20, 25]`
    Severe,
}

impl Band {
    /// All bands in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Minimal,
        Self::Mild,
        Self::Moderate,
        Self::ModeratelySevere,
        Self::Severe,
    ];

    /// Band containing `score`.
    pub fn from_score(score: f64) -> Self {
        if score >= 20.0 {
            Self::Severe
        } else if score >= 15.0 {
            Self::ModeratelySevere
        } else if score >= 10.0 {
            Self::Moderate
        } else if score >= 5.0 {
            Self::Mild
        } else {
            Self::Minimal
        }
    }

    /// Inclusive lower bound of the band.
    pub const fn lower_bound(&self) -> f64 {
        match self {
            Self::Minimal => 0.0,
            Self::Mild => 5.0,
            Self::Moderate => 10.0,
            Self::ModeratelySevere => 15.0,
            Self::Severe => 20.0,
        }
    }

    /// Human-readable interpretation.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Minimal => "Minimal or no depression indicators detected",
            Self::Mild => "Mild depression indicators detected",
            Self::Moderate => "Moderate depression indicators detected",
            Self::ModeratelySevere => "Moderately severe depression indicators detected",
            Self::Severe => "Severe depression indicators detected",
        }
    }

    /// Short kebab-case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::ModeratelySevere => "moderately-severe",
            Self::Severe => "severe",
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interpretation string for a normalized score.
pub fn interpret(score: f64) -> &'static str {
    Band::from_score(score).label()
}
