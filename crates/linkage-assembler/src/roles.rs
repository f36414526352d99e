//! Node group classification

use crate::config::AssemblerConfig;
use linkage_domain::{NodeGroup, Record};

/// Whether any infobox value or article section contains one of `keywords`
pub fn matches_role(record: &Record, keywords: &[String]) -> bool {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let hit = |text: &str| {
        let text = text.to_lowercase();
        keywords.iter().any(|k| text.contains(k.as_str()))
    };

    record.infobox_text().any(|(_, value)| hit(value))
        || record.section_text().any(|(_, body)| hit(body))
}

/// Assign a display group; the first matching rule wins
///
/// Order: affiliated, suspect, witness, investigation, involved, main
/// subject, other.
pub fn classify_group(record: &Record, has_connection: bool, config: &AssemblerConfig) -> NodeGroup {
    if has_connection {
        NodeGroup::Affiliated
    } else if matches_role(record, &config.roles.suspect) {
        NodeGroup::Suspect
    } else if matches_role(record, &config.roles.witness) {
        NodeGroup::Witness
    } else if matches_role(record, &config.roles.investigation) {
        NodeGroup::Investigation
    } else if matches_role(record, &config.roles.involved) {
        NodeGroup::Involved
    } else if record.name.contains(config.main_subject.as_str()) {
        NodeGroup::Main
    } else {
        NodeGroup::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affiliation_beats_every_role() {
        let config = AssemblerConfig::default();
        let record = Record::named("Lee Harvey Oswald").with_section("Lead", "The accused gunman.");
        assert_eq!(classify_group(&record, true, &config), NodeGroup::Affiliated);
        assert_eq!(classify_group(&record, false, &config), NodeGroup::Suspect);
    }

    #[test]
    fn test_main_subject_after_roles() {
        let config = AssemblerConfig::default();
        let record = Record::named("John F. Kennedy").with_section("Lead", "35th president.");
        assert_eq!(classify_group(&record, false, &config), NodeGroup::Main);

        let record = record.with_section("Dallas", "Crowds saw the motorcade.");
        assert_eq!(classify_group(&record, false, &config), NodeGroup::Witness);
    }

    #[test]
    fn test_role_priority() {
        let config = AssemblerConfig::default();
        let record = Record::named("Someone")
            .with_infobox("Known for", "Warren Commission testimony")
            .with_section("Lead", "He was later accused.");
        // suspect is checked before witness and investigation
        assert_eq!(classify_group(&record, false, &config), NodeGroup::Suspect);
    }

    #[test]
    fn test_role_match_is_case_insensitive_substring() {
        let config = AssemblerConfig::default();
        let record = Record::named("Agent Smith").with_infobox("Employer", "The FBI field office");
        assert_eq!(classify_group(&record, false, &config), NodeGroup::Investigation);
    }

    #[test]
    fn test_name_alone_is_not_a_role() {
        let config = AssemblerConfig::default();
        let record = Record::named("The Witness");
        assert_eq!(classify_group(&record, false, &config), NodeGroup::Other);
    }

    #[test]
    fn test_links_are_not_role_text() {
        let keywords = vec!["accomplice".to_string()];
        let record = Record::named("X").with_link(Some("accomplice"), Some("/wiki/Accomplice"));
        assert!(!matches_role(&record, &keywords));
    }
}
