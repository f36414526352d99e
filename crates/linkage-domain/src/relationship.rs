//! Relationship module - directional, classified mentions between records

use serde::{Deserialize, Serialize};

/// Family a detected relationship is classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Colleagues, partners, business contacts
    Professional,

    /// Agents, informants, intelligence services
    Intelligence,

    /// Friends, family, romantic ties
    Personal,

    /// Enemies, rivals, accusers
    Adversarial,

    /// Plotting, schemes, cover-ups
    Conspiratorial,

    /// Mention found but no family keyword in its context
    Unknown,
}

impl RelationshipType {
    /// Every classifiable family, in declaration order
    pub const FAMILIES: [RelationshipType; 5] = [
        RelationshipType::Professional,
        RelationshipType::Intelligence,
        RelationshipType::Personal,
        RelationshipType::Adversarial,
        RelationshipType::Conspiratorial,
    ];

    /// Get the type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::Professional => "professional",
            RelationshipType::Intelligence => "intelligence",
            RelationshipType::Personal => "personal",
            RelationshipType::Adversarial => "adversarial",
            RelationshipType::Conspiratorial => "conspiratorial",
            RelationshipType::Unknown => "unknown",
        }
    }

    /// Verb phrase used in generated link descriptions
    pub fn description_phrase(&self) -> &'static str {
        match self {
            RelationshipType::Professional => "had a professional relationship with",
            RelationshipType::Intelligence => "worked with in intelligence operations",
            RelationshipType::Personal => "had a personal connection to",
            RelationshipType::Adversarial => "was an adversary of",
            RelationshipType::Conspiratorial => "was allegedly involved in plotting with",
            RelationshipType::Unknown => "was connected to",
        }
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One family keyword found in a mention context
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Family the keyword belongs to
    pub family: RelationshipType,

    /// Keyword as spelled in the lexicon
    pub keyword: String,

    /// Non-overlapping occurrences in the context
    pub count: usize,
}

/// Result of analysing how one record relates to another
///
/// Directional: "A mentions B" is evaluated independently of "B mentions A".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipAnalysis {
    /// Dominant family
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,

    /// 0 when no mention was found, otherwise 1..=3
    pub strength: u8,

    /// Total mentions across sections and name variants
    pub mention_count: usize,

    /// Representative context window of the mention
    pub excerpt: String,

    /// Every keyword hit, in family then keyword order
    pub matches: Vec<KeywordMatch>,
}

impl RelationshipAnalysis {
    /// Result for a pair with no mention
    pub fn none() -> Self {
        Self {
            relationship_type: RelationshipType::Unknown,
            strength: 0,
            mention_count: 0,
            excerpt: String::new(),
            matches: Vec::new(),
        }
    }

    /// Whether this relationship should produce an edge
    pub fn is_edge(&self) -> bool {
        self.strength > 0
    }

    /// Number of distinct families among the keyword matches
    pub fn distinct_families(&self) -> usize {
        RelationshipType::FAMILIES
            .iter()
            .filter(|family| self.matches.iter().any(|m| m.family == **family))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_produces_no_edge() {
        let analysis = RelationshipAnalysis::none();
        assert!(!analysis.is_edge());
        assert_eq!(analysis.relationship_type, RelationshipType::Unknown);
    }

    #[test]
    fn test_distinct_families() {
        let mut analysis = RelationshipAnalysis::none();
        analysis.matches = vec![
            KeywordMatch { family: RelationshipType::Intelligence, keyword: "agent".into(), count: 1 },
            KeywordMatch { family: RelationshipType::Intelligence, keyword: "CIA".into(), count: 2 },
            KeywordMatch { family: RelationshipType::Personal, keyword: "friend".into(), count: 1 },
        ];
        assert_eq!(analysis.distinct_families(), 2);
    }

    #[test]
    fn test_type_serialized_name() {
        let json = serde_json::to_value(RelationshipType::Conspiratorial).unwrap();
        assert_eq!(json, "conspiratorial");
        assert_eq!(RelationshipType::FAMILIES.len(), 5);
    }
}
