//! Mention detection of one record's name inside another record's article

use crate::context::extract_context;
use linkage_domain::Record;

/// Result of scanning a source record for mentions of a target name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mention {
    /// Whether any name variant occurred
    pub found: bool,

    /// Occurrences summed over sections and name variants
    pub count: usize,

    /// One representative context window, taken from the original text
    pub context: String,
}

/// Count non-overlapping occurrences of `pattern` in `text`
///
/// An empty pattern never matches.
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    text.matches(pattern).count()
}

/// Name variants searched for: the full name and its last token
///
/// The surname lets partial mentions ("Oswald" alone) count. A single-token
/// name yields one variant.
pub fn name_variants(target_name: &str) -> Vec<&str> {
    let full = target_name.trim();
    if full.is_empty() {
        return Vec::new();
    }

    let mut variants = vec![full];
    if let Some(surname) = full.split_whitespace().last() {
        if surname != full {
            variants.push(surname);
        }
    }
    variants
}

/// Find mentions of `target_name` in the article sections of `source`
///
/// Matching is case-sensitive plain substring search. A full-name hit always
/// replaces the stored context; a surname hit only fills an empty one.
pub fn find_mentions(source: &Record, target_name: &str, radius: usize) -> Mention {
    let variants = name_variants(target_name);
    let Some(full_name) = variants.first().copied() else {
        return Mention::default();
    };

    let mut mention = Mention::default();

    for (_, body) in source.section_text() {
        for variant in &variants {
            let count = count_occurrences(body, variant);
            if count == 0 {
                continue;
            }

            mention.found = true;
            mention.count += count;

            if *variant == full_name || mention.context.is_empty() {
                mention.context = extract_context(body, variant, radius);
            }
        }
    }

    mention
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_non_overlapping() {
        assert_eq!(count_occurrences("aaaa", "aa"), 2);
        assert_eq!(count_occurrences("Oswald and Oswald", "Oswald"), 2);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn test_name_variants() {
        assert_eq!(name_variants("Lee Harvey Oswald"), vec!["Lee Harvey Oswald", "Oswald"]);
        assert_eq!(name_variants("Castro"), vec!["Castro"]);
        assert_eq!(name_variants("  Jack Ruby  "), vec!["Jack Ruby", "Ruby"]);
        assert!(name_variants("   ").is_empty());
    }

    #[test]
    fn test_surname_only_mentions() {
        let source = Record::named("A").with_section("Lead", "Oswald met Oswald's wife.");
        let mention = find_mentions(&source, "Lee Harvey Oswald", 100);
        assert!(mention.found);
        assert_eq!(mention.count, 2);
        assert_eq!(mention.context, "Oswald met Oswald's wife.");
    }

    #[test]
    fn test_full_name_counts_both_variants() {
        let source = Record::named("A").with_section("Lead", "He met Jack Ruby.");
        let mention = find_mentions(&source, "Jack Ruby", 100);
        assert_eq!(mention.count, 2);
    }

    #[test]
    fn test_full_name_context_preferred() {
        let source = Record::named("A")
            .with_section("Early life", "Ruby owned a club.")
            .with_section("Later", "Then Jack Ruby moved.");
        let mention = find_mentions(&source, "Jack Ruby", 100);
        assert_eq!(mention.context, "Then Jack Ruby moved.");
        assert_eq!(mention.count, 3);
    }

    #[test]
    fn test_surname_does_not_replace_context() {
        let source = Record::named("A")
            .with_section("Early life", "Jack Ruby owned a club.")
            .with_section("Later", "Ruby moved.");
        let mention = find_mentions(&source, "Jack Ruby", 100);
        assert_eq!(mention.context, "Jack Ruby owned a club.");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let source = Record::named("A").with_section("Lead", "a ruby ring");
        assert!(!find_mentions(&source, "Jack Ruby", 100).found);
    }

    #[test]
    fn test_no_sections() {
        let mention = find_mentions(&Record::named("A"), "Jack Ruby", 100);
        assert_eq!(mention, Mention::default());
    }
}
