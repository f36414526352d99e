//! Evidence module - scored term matches and per-record connection verdicts

use crate::{ConfidenceLevel, NodeId};
use serde::{Deserialize, Serialize};

/// One scored occurrence of a lexicon term
///
/// Created once per matched term per scanned field and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    /// Term as spelled in the lexicon
    pub term: String,

    /// Field path the term was found in (e.g. `article_sections.Lead`)
    pub source: String,

    /// Lower-cased context window around the first occurrence
    pub context: String,

    /// Contribution of this hit (`weight × context_score`), before field discounting
    pub score: f64,

    /// Context multiplier applied to the term weight
    pub context_score: f64,
}

/// Connection verdict for one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionAnalysis {
    /// Whether the score reached the connection threshold
    pub has_connection: bool,

    /// Accumulated, field-weighted score
    pub score: f64,

    /// Every hit that contributed to the score, in scan order
    pub evidence: Vec<Evidence>,

    /// Confidence band of the score
    pub confidence_level: ConfidenceLevel,
}

impl ConnectionAnalysis {
    /// Result for a record with no evidence at all
    pub fn none() -> Self {
        Self {
            has_connection: false,
            score: 0.0,
            evidence: Vec::new(),
            confidence_level: ConfidenceLevel::VeryLow,
        }
    }
}

/// One entry of the secondary evidence report
///
/// Only records with a confirmed connection are reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionReportEntry {
    /// Record name
    pub name: String,

    /// Node id of the record
    pub id: NodeId,

    /// Always true for reported entries
    pub has_connection: bool,

    /// Accumulated score
    pub score: f64,

    /// Confidence band of the score
    pub confidence_level: ConfidenceLevel,

    /// Full evidence list
    pub evidence: Vec<Evidence>,
}

impl ConnectionReportEntry {
    /// Build a report entry from a record's analysis
    pub fn new(name: &str, id: NodeId, analysis: &ConnectionAnalysis) -> Self {
        Self {
            name: name.to_string(),
            id,
            has_connection: analysis.has_connection,
            score: analysis.score,
            confidence_level: analysis.confidence_level,
            evidence: analysis.evidence.clone(),
        }
    }
}
