//! Linkage Domain Layer
//!
//! This crate contains the data model shared by every other Linkage crate:
//! the biographical records that enter the pipeline and the graph document
//! that leaves it.
//!
//! ## Key Concepts
//!
//! - **Record**: One biographical entry (infobox, article sections, links)
//! - **Evidence**: One scored term match with its source field and context
//! - **Confidence Level**: Discretized score band (very_low → very_high)
//! - **Relationship**: Directional, classified mention of one record in another
//! - **Graph**: Nodes, links and metadata consumed by the rendering layer
//!
//! ## Architecture
//!
//! - No analysis logic lives here, only shapes and pure helpers
//! - Serialized field names are the public contract with downstream consumers
//! - Node ids are a deterministic function of the record name

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod confidence;
pub mod evidence;
pub mod graph;
pub mod id;
pub mod record;
pub mod relationship;

// Re-exports for convenience
pub use confidence::{ConfidenceBands, ConfidenceLevel};
pub use evidence::{ConnectionAnalysis, ConnectionReportEntry, Evidence};
pub use graph::{Edge, EdgeType, Graph, GraphMetadata, GroupCounts, Node, NodeGroup};
pub use id::NodeId;
pub use record::{InternalLink, Record};
pub use relationship::{KeywordMatch, RelationshipAnalysis, RelationshipType};
