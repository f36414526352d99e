//! Lexicon: weighted terms, context modifiers and relationship keyword families

use crate::error::AnalyzerError;
use linkage_domain::{ConfidenceBands, RelationshipType};
use serde::{Deserialize, Serialize};

/// A weighted lexicon term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// Term text, matched case-insensitively
    pub text: String,

    /// Base contribution of one hit
    pub weight: f64,
}

impl Term {
    /// Create a new term
    pub fn new(text: impl Into<String>, weight: f64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }
}

/// Keywords that classify a mention into one relationship family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipFamily {
    /// Family these keywords vote for
    pub family: RelationshipType,

    /// Keywords, matched case-insensitively against the mention context
    pub keywords: Vec<String>,
}

impl RelationshipFamily {
    fn new(family: RelationshipType, keywords: &[&str]) -> Self {
        Self {
            family,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Multipliers applied to each scanned field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    /// Infobox values
    pub infobox: f64,

    /// Article sections
    pub article_sections: f64,

    /// Internal link display text
    pub link_text: f64,

    /// Internal link href
    pub link_href: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            infobox: 1.0,
            article_sections: 1.0,
            link_text: 0.7,
            link_href: 0.8,
        }
    }
}

/// Immutable analysis configuration
///
/// Passed explicitly into every analyzer so tests can substitute their own.
/// Increments, clamp bounds and confidence bands are policy constants that
/// may need recalibrating against real data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Human-readable name of the affiliation being detected
    pub affiliation: String,

    /// Minimum total score for a confirmed connection
    pub connection_threshold: f64,

    /// Characters kept on each side of a match when extracting context
    pub context_radius: usize,

    /// Added to the context multiplier per positive modifier found
    pub positive_increment: f64,

    /// Subtracted from the context multiplier per negative modifier found
    pub negative_decrement: f64,

    /// Lower clamp of the context multiplier
    pub min_multiplier: f64,

    /// Upper clamp of the context multiplier
    pub max_multiplier: f64,

    /// Phrases that strengthen a nearby hit
    pub positive_context: Vec<String>,

    /// Phrases that weaken a nearby hit
    pub negative_context: Vec<String>,

    /// Score bands for the confidence level
    pub confidence_bands: ConfidenceBands,

    /// Per-field score multipliers
    pub field_weights: FieldWeights,

    /// Strong indicators
    pub primary_terms: Vec<Term>,

    /// Weaker indicators
    pub secondary_terms: Vec<Term>,

    /// Relationship families, in tie-break order
    pub relationship_families: Vec<RelationshipFamily>,
}

impl Lexicon {
    /// Reference lexicon tuned for intelligence-service affiliation
    ///
    /// Terms name institutions and places tied to the services. Political
    /// movements and religious or community bodies are not terms.
    pub fn reference() -> Self {
        Self {
            affiliation: "Israeli intelligence".to_string(),
            connection_threshold: 5.0,
            context_radius: 100,
            positive_increment: 0.3,
            negative_decrement: 0.2,
            min_multiplier: 0.1,
            max_multiplier: 2.0,
            positive_context: strings(&[
                "agent",
                "operative",
                "spy",
                "intelligence",
                "connection",
                "relationship",
                "association",
                "meeting",
                "link",
                "travel",
                "collaborated",
                "worked with",
                "funded",
                "supported",
            ]),
            negative_context: strings(&[
                "denied",
                "no evidence",
                "unsubstantiated",
                "rejected claims",
                "conspiracy theory",
                "dismissed allegations",
            ]),
            confidence_bands: ConfidenceBands::default(),
            field_weights: FieldWeights::default(),
            primary_terms: vec![
                Term::new("Mossad", 10.0),
                Term::new("Israeli intelligence", 10.0),
                Term::new("Israel", 8.0),
                Term::new("Israeli", 8.0),
                Term::new("Shin Bet", 8.0),
                Term::new("Kidon", 10.0),
            ],
            secondary_terms: vec![
                Term::new("Tel Aviv", 5.0),
                Term::new("Jerusalem", 5.0),
                Term::new("Haganah", 7.0),
                Term::new("IDF", 7.0),
                Term::new("Dimona", 6.0),
                Term::new("Knesset", 5.0),
            ],
            relationship_families: vec![
                RelationshipFamily::new(
                    RelationshipType::Professional,
                    &["worked with", "colleague", "partner", "associate", "professional", "business"],
                ),
                RelationshipFamily::new(
                    RelationshipType::Intelligence,
                    &["agent", "spy", "operative", "intelligence", "CIA", "FBI", "Mossad", "KGB", "informant"],
                ),
                RelationshipFamily::new(
                    RelationshipType::Personal,
                    &["friend", "relative", "acquaintance", "family", "married", "dated", "romantic"],
                ),
                RelationshipFamily::new(
                    RelationshipType::Adversarial,
                    &["enemy", "opponent", "adversary", "rival", "accused", "testified against"],
                ),
                RelationshipFamily::new(
                    RelationshipType::Conspiratorial,
                    &["conspired", "plotted", "planned", "scheme", "secret", "cover-up"],
                ),
            ],
        }
    }

    /// Strict preset: higher threshold, weaker context boost
    pub fn strict() -> Self {
        Self {
            connection_threshold: 8.0,
            positive_increment: 0.2,
            negative_decrement: 0.3,
            max_multiplier: 1.5,
            confidence_bands: ConfidenceBands {
                low: 4.0,
                medium: 8.0,
                high: 12.0,
                very_high: 18.0,
            },
            ..Self::reference()
        }
    }

    /// Lenient preset: lower threshold, link fields weighted fully
    pub fn lenient() -> Self {
        Self {
            connection_threshold: 3.0,
            confidence_bands: ConfidenceBands {
                low: 1.5,
                medium: 3.0,
                high: 6.0,
                very_high: 10.0,
            },
            field_weights: FieldWeights {
                link_text: 1.0,
                link_href: 1.0,
                ..FieldWeights::default()
            },
            ..Self::reference()
        }
    }

    /// Primary terms followed by secondary terms
    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.primary_terms.iter().chain(self.secondary_terms.iter())
    }

    /// Whether a text contains any term of the lexicon (case-insensitive)
    pub fn mentions_affiliation(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.terms().any(|t| lower.contains(&t.text.to_lowercase()))
    }

    /// Names of the configured relationship families, in lexicon order
    pub fn family_names(&self) -> Vec<String> {
        self.relationship_families
            .iter()
            .map(|f| f.family.as_str().to_string())
            .collect()
    }

    /// Validate the lexicon
    pub fn validate(&self) -> Result<(), String> {
        if self.connection_threshold.is_nan() || self.connection_threshold <= 0.0 {
            return Err("connection_threshold must be greater than 0".to_string());
        }
        self.confidence_bands.validate()?;
        if self.confidence_bands.medium != self.connection_threshold {
            return Err(format!(
                "confidence_bands.medium ({}) must equal connection_threshold ({})",
                self.confidence_bands.medium, self.connection_threshold
            ));
        }
        if self.min_multiplier < 0.0 || self.min_multiplier > self.max_multiplier {
            return Err(format!(
                "multiplier clamp [{}, {}] is not a valid range",
                self.min_multiplier, self.max_multiplier
            ));
        }
        if self.positive_increment < 0.0 || self.negative_decrement < 0.0 {
            return Err("context increments must not be negative".to_string());
        }
        let weights = self.field_weights;
        if [weights.infobox, weights.article_sections, weights.link_text, weights.link_href]
            .iter()
            .any(|w| *w < 0.0)
        {
            return Err("field weights must not be negative".to_string());
        }
        if self.primary_terms.is_empty() && self.secondary_terms.is_empty() {
            return Err("lexicon has no terms".to_string());
        }
        for term in self.terms() {
            if term.text.trim().is_empty() {
                return Err("term text is empty".to_string());
            }
            if term.weight.is_nan() || term.weight <= 0.0 {
                return Err(format!("term '{}' must have a positive weight", term.text));
            }
        }
        if self
            .positive_context
            .iter()
            .chain(self.negative_context.iter())
            .any(|p| p.trim().is_empty())
        {
            return Err("context modifier phrase is empty".to_string());
        }
        for family in &self.relationship_families {
            if family.family == RelationshipType::Unknown {
                return Err("'unknown' cannot be a keyword family".to_string());
            }
            if family.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("family '{}' has an empty keyword", family.family));
            }
        }
        Ok(())
    }

    /// Load a lexicon from a TOML string and validate it
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        let lexicon: Lexicon = toml::from_str(toml_str)?;
        lexicon.validate().map_err(AnalyzerError::InvalidLexicon)?;
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON string and validate it
    pub fn from_json(json_str: &str) -> Result<Self, AnalyzerError> {
        let lexicon: Lexicon = serde_json::from_str(json_str)?;
        lexicon.validate().map_err(AnalyzerError::InvalidLexicon)?;
        Ok(lexicon)
    }

    /// Serialize the lexicon to a TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::reference()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
