//! Graph assembly over a batch of records

use crate::bio::{biography, Vitals};
use crate::config::AssemblerConfig;
use crate::error::AssemblerError;
use crate::roles::classify_group;
use chrono::{SecondsFormat, Utc};
use linkage_analyzer::{ConnectionAnalyzer, Lexicon, RelationshipClassifier};
use linkage_domain::{
    ConnectionAnalysis, ConnectionReportEntry, Edge, EdgeType, Graph, GraphMetadata, GroupCounts,
    Node, NodeId, Record, RelationshipAnalysis,
};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::{debug, info};

/// Result of one build: the graph document and the connection report
#[derive(Debug, Clone)]
pub struct Assembly {
    /// Graph handed to the renderer
    pub graph: Graph,

    /// Records with a confirmed affiliation, in input order
    pub report: Vec<ConnectionReportEntry>,
}

/// Builds the relationship graph from a batch of records
pub struct GraphAssembler<'a> {
    lexicon: &'a Lexicon,
    config: AssemblerConfig,
}

impl<'a> GraphAssembler<'a> {
    /// Create an assembler, rejecting an invalid lexicon or configuration
    pub fn new(lexicon: &'a Lexicon, config: AssemblerConfig) -> Result<Self, AssemblerError> {
        lexicon
            .validate()
            .map_err(|e| AssemblerError::Config(format!("invalid lexicon: {}", e)))?;
        config.validate().map_err(AssemblerError::Config)?;
        Ok(Self { lexicon, config })
    }

    /// Get the assembler configuration
    pub fn config(&self) -> &AssemblerConfig {
        &self.config
    }

    /// Build the graph and report for `records`
    ///
    /// Deterministic apart from `metadata.generatedDate`: nodes follow input
    /// order, edges follow (source index, target index) order.
    pub fn assemble(&self, records: &[Record]) -> Result<Assembly, AssemblerError> {
        info!("Processing {} records", records.len());
        let ids = assign_ids(records)?;

        let analyzer = ConnectionAnalyzer::new(self.lexicon);
        let analyses: Vec<ConnectionAnalysis> =
            records.iter().map(|r| analyzer.analyze_record(r)).collect();

        let mut report = Vec::new();
        for ((record, id), analysis) in records.iter().zip(&ids).zip(&analyses) {
            if analysis.has_connection {
                info!(
                    "Confirmed connection: {} (confidence: {}, score: {:.1})",
                    record.name, analysis.confidence_level, analysis.score
                );
                report.push(ConnectionReportEntry::new(&record.name, id.clone(), analysis));
            }
        }

        let nodes: Vec<Node> = records
            .iter()
            .zip(ids)
            .zip(&analyses)
            .map(|((record, id), analysis)| self.build_node(record, id, analysis))
            .collect();

        let links = self.build_edges(records, &nodes);
        info!("Generated {} nodes and {} links", nodes.len(), links.len());

        let metadata = GraphMetadata {
            total_people: records.len(),
            affiliated_connections: report.len(),
            relationship_types: self.lexicon.family_names(),
            generated_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            groups: GroupCounts::tally(&nodes),
        };

        Ok(Assembly {
            graph: Graph {
                nodes,
                links,
                metadata,
            },
            report,
        })
    }

    fn build_node(&self, record: &Record, id: NodeId, analysis: &ConnectionAnalysis) -> Node {
        let vitals = Vitals::from_record(record);
        Node {
            id,
            name: record.name.clone(),
            group: classify_group(record, analysis.has_connection, &self.config),
            url: record.url.clone().unwrap_or_default(),
            bio: biography(record, self.config.bio_length),
            has_connection: analysis.has_connection,
            connection_score: analysis.score,
            connection_confidence: analysis.confidence_level,
            birth: vitals.birth,
            death: vitals.death,
            occupation: vitals.occupation,
        }
    }

    fn build_edges(&self, records: &[Record], nodes: &[Node]) -> Vec<Edge> {
        let classifier = RelationshipClassifier::new(self.lexicon);
        let count = records.len();

        let pair = |i: usize, j: usize| -> Option<Edge> {
            if i == j {
                return None;
            }
            let analysis = classifier.analyze_pair(&records[i], &records[j]);
            if !analysis.is_edge() {
                return None;
            }
            Some(self.build_edge(&nodes[i], &nodes[j], analysis))
        };
        let pair = &pair;

        if self.config.parallel {
            debug!("Pairwise pass over {} ordered pairs on the rayon pool", count * count);
            (0..count)
                .into_par_iter()
                .flat_map_iter(|i| (0..count).filter_map(move |j| pair(i, j)))
                .collect()
        } else {
            debug!("Pairwise pass over {} ordered pairs", count * count);
            (0..count)
                .flat_map(|i| (0..count).filter_map(move |j| pair(i, j)))
                .collect()
        }
    }

    fn build_edge(&self, source: &Node, target: &Node, analysis: RelationshipAnalysis) -> Edge {
        let edge_type = self.resolve_edge_type(source, target, &analysis);
        let description = match edge_type {
            EdgeType::Affiliated => format!(
                "{} had {} connections with {}.",
                source.name, self.lexicon.affiliation, target.name
            ),
            _ => format!(
                "{} {} {}.",
                source.name,
                analysis.relationship_type.description_phrase(),
                target.name
            ),
        };

        Edge {
            source: source.id.clone(),
            target: target.id.clone(),
            edge_type,
            relationship_type: analysis.relationship_type,
            strength: analysis.strength,
            excerpt: analysis.excerpt,
            description,
        }
    }

    /// `affiliated` when both ends are affiliated, or exactly one is and the
    /// excerpt itself names an affiliation term
    fn resolve_edge_type(
        &self,
        source: &Node,
        target: &Node,
        analysis: &RelationshipAnalysis,
    ) -> EdgeType {
        let affiliated = match (source.has_connection, target.has_connection) {
            (true, true) => true,
            (true, false) | (false, true) => self.lexicon.mentions_affiliation(&analysis.excerpt),
            (false, false) => false,
        };
        if affiliated {
            EdgeType::Affiliated
        } else {
            EdgeType::from(analysis.relationship_type)
        }
    }
}

/// Derive node ids, failing on blank names and id collisions
fn assign_ids(records: &[Record]) -> Result<Vec<NodeId>, AssemblerError> {
    let mut seen: HashMap<NodeId, usize> = HashMap::with_capacity(records.len());
    let mut ids = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(AssemblerError::MissingName { index });
        }
        let id = NodeId::from_name(&record.name);
        if let Some(&first) = seen.get(&id) {
            return Err(AssemblerError::DuplicateId {
                id: id.to_string(),
                first: records[first].name.clone(),
                second: record.name.clone(),
            });
        }
        seen.insert(id.clone(), index);
        ids.push(id);
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkage_domain::NodeGroup;

    fn assembler(lexicon: &Lexicon) -> GraphAssembler<'_> {
        GraphAssembler::new(lexicon, AssemblerConfig::sequential()).unwrap()
    }

    #[test]
    fn test_assign_ids_rejects_collisions() {
        let records = vec![Record::named("J. Smith"), Record::named("J, Smith")];
        match assign_ids(&records) {
            Err(AssemblerError::DuplicateId { id, first, second }) => {
                assert_eq!(id, "j__smith");
                assert_eq!(first, "J. Smith");
                assert_eq!(second, "J, Smith");
            }
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn test_assign_ids_rejects_blank_name() {
        let records = vec![Record::named("Ann"), Record::named("   ")];
        assert!(matches!(
            assign_ids(&records),
            Err(AssemblerError::MissingName { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_invalid_lexicon() {
        let mut lexicon = Lexicon::reference();
        lexicon.connection_threshold = 0.0;
        assert!(GraphAssembler::new(&lexicon, AssemblerConfig::default()).is_err());
    }

    #[test]
    fn test_one_sided_affiliation_needs_term_in_excerpt() {
        let lexicon = Lexicon::reference();
        let records = vec![
            Record::named("Agent Alpha").with_section(
                "Lead",
                "A Mossad officer. Years later, in another city entirely, far from any of that work, he became a friend of Bravo Person while both were retired.",
            ),
            Record::named("Bravo Person").with_section("Lead", "Kept to himself."),
        ];
        let assembly = assembler(&lexicon).assemble(&records).unwrap();
        let nodes = &assembly.graph.nodes;
        assert_eq!(nodes[0].group, NodeGroup::Affiliated);
        assert_eq!(nodes[1].group, NodeGroup::Other);

        let edge = &assembly.graph.links[0];
        assert_eq!(edge.source.as_str(), "agent_alpha");
        assert!(!edge.excerpt.contains("Mossad"));
        assert_eq!(edge.edge_type, EdgeType::Personal);
        assert_eq!(edge.description, "Agent Alpha had a personal connection to Bravo Person.");
    }
}
