use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Raw probabilities above this get the boost.
pub const BOOST_THRESHOLD: f64 = 0.25;
pub const BOOST_AMOUNT: f64 = 0.30;
/// Reported confidence never exceeds this.
pub const BOOST_CAP: f64 = 0.98;
/// Adjusted confidence at or above this lands in the high-confidence dataset.
pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.60;

/// How the classifier's raw top probability becomes the reported confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidencePolicy {
    /// `min(p + 0.30, 0.98)` when `p > 0.25`, else `p`.
    Boost,
    /// Report `p` as is.
    Passthrough,
}

impl ConfidencePolicy {
    pub fn adjust(self, p: f64) -> f64 {
        match self {
            ConfidencePolicy::Boost if p > BOOST_THRESHOLD => (p + BOOST_AMOUNT).min(BOOST_CAP),
            ConfidencePolicy::Boost | ConfidencePolicy::Passthrough => p,
        }
    }
}

impl FromStr for ConfidencePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "boost" => Ok(ConfidencePolicy::Boost),
            "passthrough" | "raw" => Ok(ConfidencePolicy::Passthrough),
            other => anyhow::bail!("unknown confidence policy '{other}'"),
        }
    }
}

impl fmt::Display for ConfidencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidencePolicy::Boost => write!(f, "boost"),
            ConfidencePolicy::Passthrough => write!(f, "passthrough"),
        }
    }
}

/// Which dataset file a prediction is appended to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBucket {
    High,
    Low,
}

impl ConfidenceBucket {
    pub fn for_probability(adjusted: f64) -> Self {
        if adjusted >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceBucket::High
        } else {
            ConfidenceBucket::Low
        }
    }
}

/// `0.8` -> `"80.0%"`
pub fn format_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// `0.123456` -> `12.35`
pub fn percent_rounded(p: f64) -> f64 {
    (p * 100.0 * 100.0).round() / 100.0
}
