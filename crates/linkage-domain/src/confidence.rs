//! Confidence module - discretized bands over an accumulated connection score

use serde::{Deserialize, Serialize};

/// Confidence level of a record's connection score
///
/// Levels are ordered from weakest to strongest:
/// - VeryLow: Little or no evidence
/// - Low: Some evidence, below the connection threshold
/// - Medium: Minimum confirmed tier (score reached the threshold)
/// - High: Strong evidence
/// - VeryHigh: Overwhelming evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    /// Below the `low` band
    VeryLow,

    /// Between `low` and `medium`
    Low,

    /// Between `medium` and `high`
    Medium,

    /// Between `high` and `very_high`
    High,

    /// At or above `very_high`
    VeryHigh,
}

impl ConfidenceLevel {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "very_low",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very_high",
        }
    }

    /// Parse a level from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "very_low" => Some(ConfidenceLevel::VeryLow),
            "low" => Some(ConfidenceLevel::Low),
            "medium" => Some(ConfidenceLevel::Medium),
            "high" => Some(ConfidenceLevel::High),
            "very_high" => Some(ConfidenceLevel::VeryHigh),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfidenceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid confidence level: {}", s))
    }
}

/// Lower score bounds of each confidence level above `VeryLow`
///
/// These are policy constants tuned against real data, not algorithmic truths.
/// The `medium` bound is expected to equal the connection threshold so that
/// `Medium` is the weakest confirmed level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBands {
    /// Minimum score for `Low`
    pub low: f64,

    /// Minimum score for `Medium`
    pub medium: f64,

    /// Minimum score for `High`
    pub high: f64,

    /// Minimum score for `VeryHigh`
    pub very_high: f64,
}

impl ConfidenceBands {
    /// Map a score to its confidence level
    ///
    /// # Examples
    ///
    /// ```
    /// use linkage_domain::{ConfidenceBands, ConfidenceLevel};
    ///
    /// let bands = ConfidenceBands::default();
    /// assert_eq!(bands.level_for(0.0), ConfidenceLevel::VeryLow);
    /// assert_eq!(bands.level_for(5.0), ConfidenceLevel::Medium);
    /// assert_eq!(bands.level_for(12.0), ConfidenceLevel::VeryHigh);
    /// ```
    pub fn level_for(&self, score: f64) -> ConfidenceLevel {
        if score >= self.very_high {
            ConfidenceLevel::VeryHigh
        } else if score >= self.high {
            ConfidenceLevel::High
        } else if score >= self.medium {
            ConfidenceLevel::Medium
        } else if score >= self.low {
            ConfidenceLevel::Low
        } else {
            ConfidenceLevel::VeryLow
        }
    }

    /// Check that the bounds are finite and strictly ascending
    pub fn validate(&self) -> Result<(), String> {
        let bounds = [self.low, self.medium, self.high, self.very_high];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err("confidence bands must be finite".to_string());
        }
        if bounds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(format!(
                "confidence bands must be strictly ascending, got {:?}",
                bounds
            ));
        }
        Ok(())
    }
}

impl Default for ConfidenceBands {
    fn default() -> Self {
        Self {
            low: 3.0,
            medium: 5.0,
            high: 8.0,
            very_high: 12.0,
        }
    }
}
