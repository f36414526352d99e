//! Graph module - the document handed to the rendering layer

use crate::{ConfidenceLevel, NodeId, RelationshipType};
use serde::{Deserialize, Serialize};

/// Display group of a node, assigned by the first matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeGroup {
    /// Confirmed topical affiliation
    Affiliated,

    /// The designated main subject
    Main,

    /// Role keywords: suspect, accused, ...
    Suspect,

    /// Role keywords: witness, testimony, ...
    Witness,

    /// Role keywords: police, commission, ...
    Investigation,

    /// Role keywords: participant, accomplice, ...
    Involved,

    /// Nothing matched
    Other,
}

impl NodeGroup {
    /// Every group, in metadata order
    pub const ALL: [NodeGroup; 7] = [
        NodeGroup::Affiliated,
        NodeGroup::Main,
        NodeGroup::Suspect,
        NodeGroup::Witness,
        NodeGroup::Investigation,
        NodeGroup::Involved,
        NodeGroup::Other,
    ];

    /// Get the group name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeGroup::Affiliated => "affiliated",
            NodeGroup::Main => "main",
            NodeGroup::Suspect => "suspect",
            NodeGroup::Witness => "witness",
            NodeGroup::Investigation => "investigation",
            NodeGroup::Involved => "involved",
            NodeGroup::Other => "other",
        }
    }
}

impl std::fmt::Display for NodeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type of an edge: its relationship family, or the affiliation override
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// See [`RelationshipType::Professional`]
    Professional,
    /// See [`RelationshipType::Intelligence`]
    Intelligence,
    /// See [`RelationshipType::Personal`]
    Personal,
    /// See [`RelationshipType::Adversarial`]
    Adversarial,
    /// See [`RelationshipType::Conspiratorial`]
    Conspiratorial,
    /// See [`RelationshipType::Unknown`]
    Unknown,
    /// The relationship itself carries the topical affiliation
    Affiliated,
}

impl From<RelationshipType> for EdgeType {
    fn from(relationship_type: RelationshipType) -> Self {
        match relationship_type {
            RelationshipType::Professional => EdgeType::Professional,
            RelationshipType::Intelligence => EdgeType::Intelligence,
            RelationshipType::Personal => EdgeType::Personal,
            RelationshipType::Adversarial => EdgeType::Adversarial,
            RelationshipType::Conspiratorial => EdgeType::Conspiratorial,
            RelationshipType::Unknown => EdgeType::Unknown,
        }
    }
}

/// A person in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Deterministic id derived from the name
    pub id: NodeId,

    /// Record name
    pub name: String,

    /// Display group
    pub group: NodeGroup,

    /// Source URL, empty when unknown
    pub url: String,

    /// Short biography
    pub bio: String,

    /// Whether the record has a confirmed affiliation
    pub has_connection: bool,

    /// Accumulated connection score
    pub connection_score: f64,

    /// Confidence band of the connection score
    pub connection_confidence: ConfidenceLevel,

    /// Infobox `Born`
    pub birth: Option<String>,

    /// Infobox `Died`
    pub death: Option<String>,

    /// Infobox `Occupation(s)` or `Occupation`
    pub occupation: Option<String>,
}

/// A directional relationship between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Node whose text mentions the target
    pub source: NodeId,

    /// Node being mentioned
    pub target: NodeId,

    /// Family, or the affiliation override
    #[serde(rename = "type")]
    pub edge_type: EdgeType,

    /// Classified family, never overridden
    pub relationship_type: RelationshipType,

    /// 1..=3
    pub strength: u8,

    /// Context window of the mention
    pub excerpt: String,

    /// Human-readable one-line summary
    pub description: String,
}

/// Node count per group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupCounts {
    /// Affiliated nodes
    pub affiliated: usize,
    /// Main-subject nodes
    pub main: usize,
    /// Suspect nodes
    pub suspect: usize,
    /// Witness nodes
    pub witness: usize,
    /// Investigation nodes
    pub investigation: usize,
    /// Involved nodes
    pub involved: usize,
    /// Everything else
    pub other: usize,
}

impl GroupCounts {
    /// Count the groups of a node list
    pub fn tally(nodes: &[Node]) -> Self {
        let mut counts = Self::default();
        for node in nodes {
            *counts.slot(node.group) += 1;
        }
        counts
    }

    /// Count for one group
    pub fn get(&self, group: NodeGroup) -> usize {
        match group {
            NodeGroup::Affiliated => self.affiliated,
            NodeGroup::Main => self.main,
            NodeGroup::Suspect => self.suspect,
            NodeGroup::Witness => self.witness,
            NodeGroup::Investigation => self.investigation,
            NodeGroup::Involved => self.involved,
            NodeGroup::Other => self.other,
        }
    }

    fn slot(&mut self, group: NodeGroup) -> &mut usize {
        match group {
            NodeGroup::Affiliated => &mut self.affiliated,
            NodeGroup::Main => &mut self.main,
            NodeGroup::Suspect => &mut self.suspect,
            NodeGroup::Witness => &mut self.witness,
            NodeGroup::Investigation => &mut self.investigation,
            NodeGroup::Involved => &mut self.involved,
            NodeGroup::Other => &mut self.other,
        }
    }
}

/// Aggregate information about one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphMetadata {
    /// Number of input records
    pub total_people: usize,

    /// Number of records with a confirmed affiliation
    pub affiliated_connections: usize,

    /// Names of the relationship families known to the lexicon
    pub relationship_types: Vec<String>,

    /// ISO-8601 UTC generation timestamp
    pub generated_date: String,

    /// Node count per group
    pub groups: GroupCounts,
}

/// The graph document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// One node per record
    pub nodes: Vec<Node>,

    /// One edge per ordered pair with a detected relationship
    pub links: Vec<Edge>,

    /// Run metadata
    pub metadata: GraphMetadata,
}

impl Graph {
    /// Number of edges touching a node (either direction)
    pub fn degree(&self, id: &NodeId) -> usize {
        self.links
            .iter()
            .filter(|e| &e.source == id || &e.target == id)
            .count()
    }
}
