//! Linkage Assembler
//!
//! Turns a batch of biographical records into the relationship graph
//! document and the connection report.
//!
//! # Pipeline
//!
//! 1. Derive node ids and reject blank names or id collisions
//! 2. Score every record for the lexicon's affiliation
//! 3. Build nodes: group, biography, vitals
//! 4. Classify every ordered pair of distinct records (parallel by default)
//! 5. Aggregate metadata and the report of confirmed records
//!
//! # Example Usage
//!
//! ```
//! use linkage_analyzer::Lexicon;
//! use linkage_assembler::{AssemblerConfig, GraphAssembler};
//! use linkage_domain::Record;
//!
//! let lexicon = Lexicon::reference();
//! let assembler = GraphAssembler::new(&lexicon, AssemblerConfig::default())?;
//!
//! let records = vec![
//!     Record::named("Yuri Nosenko")
//!         .with_section("Lead", "Met with Mossad officials and Oswald regarding intelligence matters."),
//!     Record::named("Lee Harvey Oswald").with_section("Lead", "No known activity."),
//! ];
//!
//! let assembly = assembler.assemble(&records)?;
//! assert_eq!(assembly.graph.nodes.len(), 2);
//! assert_eq!(assembly.graph.links.len(), 1);
//! assert_eq!(assembly.report.len(), 1);
//! # Ok::<(), linkage_assembler::AssemblerError>(())
//! ```

#![warn(missing_docs)]

mod assembler;
mod bio;
mod config;
mod document;
mod error;
mod roles;

pub use assembler::{Assembly, GraphAssembler};
pub use bio::{biography, truncate, Vitals};
pub use config::{AssemblerConfig, RoleKeywords};
pub use document::{parse_records, read_records, write_outputs, OutputPaths};
pub use error::AssemblerError;
pub use roles::{classify_group, matches_role};
