use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::errors::CephoError;

/// How trustworthy an insight is judged to be.
///
/// Totally ordered: `Low < Medium < High < Verified`. The order drives
/// badge styling in the UI and gates downstream actions such as report
/// inclusion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
    /// Only reachable for insights a reviewer has confirmed.
    Verified,
}

impl ConfidenceLevel {
    /// Every level, lowest first.
    pub const ALL: [ConfidenceLevel; 4] = [
        ConfidenceLevel::Low,
        ConfidenceLevel::Medium,
        ConfidenceLevel::High,
        ConfidenceLevel::Verified,
    ];

    /// Score at or above which [`ConfidenceLevel::from_score`] yields `High`.
    pub const HIGH_SCORE: f64 = 0.8;
    /// Score at or above which [`ConfidenceLevel::from_score`] yields `Medium`.
    pub const MEDIUM_SCORE: f64 = 0.5;

    pub const fn lowest() -> Self {
        ConfidenceLevel::Low
    }

    pub const fn highest() -> Self {
        ConfidenceLevel::Verified
    }

    /// Bucket a model-reported score in [0.0, 1.0].
    ///
    /// Never returns `Verified`; that level is reserved for reviewer
    /// confirmation. Non-finite scores map to `Low`.
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            return ConfidenceLevel::Low;
        }
        let score = score.clamp(0.0, 1.0);
        if score >= Self::HIGH_SCORE {
            ConfidenceLevel::High
        } else if score >= Self::MEDIUM_SCORE {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }

    /// Wire name, as stored and serialized.
    pub const fn as_str(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Verified => "verified",
        }
    }

    /// Human-readable badge text.
    pub const fn label(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "Low confidence",
            ConfidenceLevel::Medium => "Medium confidence",
            ConfidenceLevel::High => "High confidence",
            ConfidenceLevel::Verified => "Verified",
        }
    }

    /// CSS class the dashboard uses for the confidence badge.
    pub const fn badge_class(self) -> &'static str {
        match self {
            ConfidenceLevel::Low => "badge-confidence-low",
            ConfidenceLevel::Medium => "badge-confidence-medium",
            ConfidenceLevel::High => "badge-confidence-high",
            ConfidenceLevel::Verified => "badge-confidence-verified",
        }
    }

    /// Display severity: 0 for verified up to 3 for low.
    pub const fn severity(self) -> u8 {
        match self {
            ConfidenceLevel::Low => 3,
            ConfidenceLevel::Medium => 2,
            ConfidenceLevel::High => 1,
            ConfidenceLevel::Verified => 0,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = CephoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ConfidenceLevel::Low),
            "medium" => Ok(ConfidenceLevel::Medium),
            "high" => Ok(ConfidenceLevel::High),
            "verified" => Ok(ConfidenceLevel::Verified),
            _ => Err(CephoError::UnknownVariant {
                kind: "confidence level",
                value: s.to_string(),
            }),
        }
    }
}
