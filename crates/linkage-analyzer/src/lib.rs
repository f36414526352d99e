//! Linkage Analyzer
//!
//! Scores biographical records for a topical affiliation and classifies the
//! relationships between them.
//!
//! # Overview
//!
//! Everything here is keyword and substring based: no tokenization, stemming
//! or entity disambiguation. All behaviour is driven by an explicit
//! [`Lexicon`] handed to each analyzer, so tests and callers can substitute
//! their own terms, modifiers and thresholds.
//!
//! # Architecture
//!
//! ```text
//! Record ─┬─ ConnectionAnalyzer ── context window ── context multiplier ── ConnectionAnalysis
//!         └─ RelationshipClassifier ── mention finder ── keyword families ── RelationshipAnalysis
//! ```
//!
//! # Example Usage
//!
//! ```
//! use linkage_analyzer::{ConnectionAnalyzer, Lexicon, RelationshipClassifier};
//! use linkage_domain::Record;
//!
//! let lexicon = Lexicon::reference();
//!
//! let nosenko = Record::named("Yuri Nosenko")
//!     .with_section("Lead", "Met with Mossad officials and Oswald regarding intelligence matters.");
//! let oswald = Record::named("Lee Harvey Oswald").with_section("Lead", "No known activity.");
//!
//! let analysis = ConnectionAnalyzer::new(&lexicon).analyze_record(&nosenko);
//! assert!(analysis.has_connection);
//!
//! let relationship = RelationshipClassifier::new(&lexicon).analyze_pair(&nosenko, &oswald);
//! assert_eq!(relationship.relationship_type.as_str(), "intelligence");
//! ```

#![warn(missing_docs)]

mod classifier;
mod connection;
mod context;
mod error;
mod lexicon;
mod mentions;


pub use classifier::{relationship_strength, RelationshipClassifier};
pub use connection::{ConnectionAnalyzer, TextAnalysis};
pub use context::{extract_context, score_context};
pub use error::AnalyzerError;
pub use lexicon::{FieldWeights, Lexicon, RelationshipFamily, Term};
pub use mentions::{count_occurrences, find_mentions, name_variants, Mention};
