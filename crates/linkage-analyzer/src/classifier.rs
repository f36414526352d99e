//! Relationship classification of detected mentions

use crate::lexicon::Lexicon;
use crate::mentions::{count_occurrences, find_mentions, Mention};
use linkage_domain::{KeywordMatch, Record, RelationshipAnalysis, RelationshipType};

/// Classifies directional relationships between records
#[derive(Debug, Clone, Copy)]
pub struct RelationshipClassifier<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> RelationshipClassifier<'a> {
    /// Create a classifier over a lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Analyse how `source` relates to `target` through `source`'s article text
    pub fn analyze_pair(&self, source: &Record, target: &Record) -> RelationshipAnalysis {
        let mention = find_mentions(source, &target.name, self.lexicon.context_radius);
        self.classify(&mention)
    }

    /// Classify a mention by the keyword families found in its context
    ///
    /// The dominant family is the one owning the single most frequent keyword.
    /// Ties go to the family declared first in the lexicon, then to the keyword
    /// listed first.
    pub fn classify(&self, mention: &Mention) -> RelationshipAnalysis {
        if !mention.found {
            return RelationshipAnalysis::none();
        }

        let context = mention.context.to_lowercase();
        let mut matches = Vec::new();

        for family in &self.lexicon.relationship_families {
            for keyword in &family.keywords {
                let count = count_occurrences(&context, &keyword.to_lowercase());
                if count > 0 {
                    matches.push(KeywordMatch {
                        family: family.family,
                        keyword: keyword.clone(),
                        count,
                    });
                }
            }
        }

        let mut dominant: Option<&KeywordMatch> = None;
        for candidate in &matches {
            if dominant.map_or(true, |best| candidate.count > best.count) {
                dominant = Some(candidate);
            }
        }
        let relationship_type = dominant.map_or(RelationshipType::Unknown, |m| m.family);

        let mut analysis = RelationshipAnalysis {
            relationship_type,
            strength: 0,
            mention_count: mention.count,
            excerpt: mention.context.clone(),
            matches,
        };
        analysis.strength = relationship_strength(analysis.mention_count, analysis.distinct_families());
        analysis
    }
}

/// Strength of a found relationship, 1..=3
///
/// 3 for three or more mentions, or any mention with two or more families;
/// 2 for two mentions, or any mention with one family; otherwise 1.
pub fn relationship_strength(mention_count: usize, distinct_families: usize) -> u8 {
    if mention_count >= 3 || (mention_count >= 1 && distinct_families >= 2) {
        3
    } else if mention_count >= 2 || (mention_count >= 1 && distinct_families >= 1) {
        2
    } else {
        1
    }
}
