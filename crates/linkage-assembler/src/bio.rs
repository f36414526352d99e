//! Biography and vital details for nodes

use linkage_domain::Record;

/// Vital details pulled from the infobox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vitals {
    /// `Born`
    pub birth: Option<String>,
    /// `Died`
    pub death: Option<String>,
    /// `Occupation(s)`, else `Occupation`
    pub occupation: Option<String>,
}

impl Vitals {
    /// Read the vitals of a record
    pub fn from_record(record: &Record) -> Self {
        let field = |key: &str| {
            record
                .infobox_value(key)
                .filter(|v| !v.trim().is_empty())
                .map(str::to_string)
        };
        Self {
            birth: field("Born"),
            death: field("Died"),
            occupation: field("Occupation(s)").or_else(|| field("Occupation")),
        }
    }
}

/// Short biography: the `Lead` section, else the first non-empty section
pub fn biography(record: &Record, max_chars: usize) -> String {
    let text = record
        .section("Lead")
        .filter(|lead| !lead.trim().is_empty())
        .or_else(|| {
            record
                .section_text()
                .map(|(_, body)| body)
                .find(|body| !body.trim().is_empty())
        })
        .unwrap_or("");
    truncate(text, max_chars)
}

/// Cut `text` to `max_chars` characters, appending `...` when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_preferred() {
        let record = Record::named("A")
            .with_section("Early life", "Born in Ohio.")
            .with_section("Lead", "A short lead.");
        assert_eq!(biography(&record, 300), "A short lead.");
    }

    #[test]
    fn test_first_non_empty_section_fallback() {
        let record = Record::named("A")
            .with_section("Lead", "  ")
            .with_section("Career", "")
            .with_section("Later life", "Retired.");
        assert_eq!(biography(&record, 300), "Retired.");
        assert_eq!(biography(&Record::named("B"), 300), "");
    }

    #[test]
    fn test_truncate_on_char_boundary() {
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("héllo wörld", 7), "héllo w...");
    }

    #[test]
    fn test_vitals() {
        let record = Record::named("A")
            .with_infobox("Born", "May 18, 1939")
            .with_infobox("Occupation", "Pilot")
            .with_infobox("Died", "");
        let vitals = Vitals::from_record(&record);
        assert_eq!(vitals.birth.as_deref(), Some("May 18, 1939"));
        assert_eq!(vitals.death, None);
        assert_eq!(vitals.occupation.as_deref(), Some("Pilot"));

        let record = record.with_infobox("Occupation(s)", "Pilot, author");
        assert_eq!(
            Vitals::from_record(&record).occupation.as_deref(),
            Some("Pilot, author")
        );
    }
}
