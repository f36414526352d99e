//! Connection scoring for single text fields and whole records

use crate::context::{extract_context, score_context};
use crate::lexicon::Lexicon;
use linkage_domain::{ConnectionAnalysis, Evidence, Record};
use tracing::debug;

/// Score and evidence of one scanned text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextAnalysis {
    /// Sum of term contributions, before field weighting
    pub score: f64,

    /// One entry per matched term
    pub evidence: Vec<Evidence>,
}

/// Scores records against a lexicon
#[derive(Debug, Clone, Copy)]
pub struct ConnectionAnalyzer<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> ConnectionAnalyzer<'a> {
    /// Create an analyzer over a lexicon
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Scan one text field for every lexicon term
    ///
    /// Primary terms are checked before secondary terms; that order only
    /// affects evidence ordering. Absent or empty text scores zero.
    pub fn analyze_text(&self, text: Option<&str>, source: &str) -> TextAnalysis {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return TextAnalysis::default();
        };

        let lower = text.to_lowercase();
        let mut analysis = TextAnalysis::default();

        for term in self.lexicon.terms() {
            let needle = term.text.to_lowercase();
            if !lower.contains(&needle) {
                continue;
            }

            let context = extract_context(&lower, &needle, self.lexicon.context_radius);
            let context_score = score_context(&context, self.lexicon);
            let term_score = term.weight * context_score;

            analysis.score += term_score;
            analysis.evidence.push(Evidence {
                term: term.text.clone(),
                source: source.to_string(),
                context,
                score: term_score,
                context_score,
            });
        }

        analysis
    }

    /// Aggregate the connection score of a record over all its text fields
    ///
    /// Infobox values and article sections count at their configured weight
    /// (1.0 in the reference lexicon); link text and hrefs are discounted.
    pub fn analyze_record(&self, record: &Record) -> ConnectionAnalysis {
        let weights = self.lexicon.field_weights;
        let mut score: f64 = 0.0;
        let mut evidence = Vec::new();

        let mut absorb = |result: TextAnalysis, weight: f64| {
            if result.score > 0.0 {
                score += result.score * weight;
                evidence.extend(result.evidence);
            }
        };

        for (key, value) in record.infobox_text() {
            absorb(self.analyze_text(Some(value), &format!("infobox.{}", key)), weights.infobox);
        }

        for (heading, body) in record.section_text() {
            absorb(
                self.analyze_text(Some(body), &format!("article_sections.{}", heading)),
                weights.article_sections,
            );
        }

        for link in record.links() {
            absorb(self.analyze_text(link.text.as_deref(), "internal_links"), weights.link_text);
            absorb(self.analyze_text(link.href.as_deref(), "internal_links_href"), weights.link_href);
        }

        let has_connection = score >= self.lexicon.connection_threshold;
        let confidence_level = self.lexicon.confidence_bands.level_for(score);

        debug!(
            "Scored '{}': {:.2} ({}, {} evidence)",
            record.name,
            score,
            confidence_level,
            evidence.len()
        );

        ConnectionAnalysis {
            has_connection,
            score,
            evidence,
            confidence_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Term;
    use linkage_domain::ConfidenceLevel;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_text_scores_zero() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);
        assert_eq!(analyzer.analyze_text(None, "x"), TextAnalysis::default());
        assert_eq!(analyzer.analyze_text(Some(""), "x"), TextAnalysis::default());
    }

    #[test]
    fn test_single_term_with_context() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);
        let result = analyzer.analyze_text(Some("A Mossad agent."), "article_sections.Lead");

        assert_eq!(result.evidence.len(), 1);
        let hit = &result.evidence[0];
        assert_eq!(hit.term, "Mossad");
        assert_eq!(hit.source, "article_sections.Lead");
        assert_eq!(hit.context, "a mossad agent.");
        assert!(approx(hit.context_score, 1.3));
        assert!(approx(result.score, 13.0));
    }

    #[test]
    fn test_overlapping_terms_both_count() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);
        let result = analyzer.analyze_text(Some("Born in an Israeli town."), "infobox.Born");

        let terms: Vec<_> = result.evidence.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["Israel", "Israeli"]);
        assert!(approx(result.score, 16.0));
    }

    #[test]
    fn test_link_fields_are_discounted() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);
        let record = Record::named("Someone")
            .with_link(Some("Knesset"), None)
            .with_link(None, Some("/wiki/Knesset"));

        let result = analyzer.analyze_record(&record);
        assert!(approx(result.score, 5.0 * 0.7 + 5.0 * 0.8));
        assert_eq!(result.evidence.len(), 2);
        assert_eq!(result.evidence[0].source, "internal_links");
        assert_eq!(result.evidence[1].source, "internal_links_href");
        // Evidence keeps the undiscounted hit score
        assert!(approx(result.evidence[0].score, 5.0));
    }

    #[test]
    fn test_threshold_boundary() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);

        let at = Record::named("At").with_section("Lead", "Visited Tel Aviv in 1962.");
        let result = analyzer.analyze_record(&at);
        assert!(approx(result.score, 5.0));
        assert!(result.has_connection);
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);

        let mut below_lexicon = Lexicon::reference();
        below_lexicon.secondary_terms = vec![Term::new("Tel Aviv", 4.0)];
        let below = ConnectionAnalyzer::new(&below_lexicon).analyze_record(&at);
        assert!(approx(below.score, 4.0));
        assert!(!below.has_connection);
        assert_eq!(below.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn test_record_without_fields() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);
        let result = analyzer.analyze_record(&Record::named("John Doe"));
        assert_eq!(result, ConnectionAnalysis::none());
    }

    #[test]
    fn test_sources_name_their_fields() {
        let lexicon = Lexicon::reference();
        let analyzer = ConnectionAnalyzer::new(&lexicon);
        let record = Record::named("X")
            .with_infobox("Allegiance", "Shin Bet")
            .with_section("Career", "Stationed in Jerusalem.");

        let result = analyzer.analyze_record(&record);
        let sources: Vec<_> = result.evidence.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["infobox.Allegiance", "article_sections.Career"]);
        assert!(result.has_connection);
    }
}
