//! Configuration for the Assembler

use crate::error::AssemblerError;
use serde::{Deserialize, Serialize};

/// Keyword sets for the role-based node groups
///
/// Matching is a case-insensitive substring test, so `"saw"` also hits
/// `"sawmill"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleKeywords {
    /// Keywords for the `suspect` group
    pub suspect: Vec<String>,

    /// Keywords for the `witness` group
    pub witness: Vec<String>,

    /// Keywords for the `investigation` group
    pub investigation: Vec<String>,

    /// Keywords for the `involved` group
    pub involved: Vec<String>,
}

impl Default for RoleKeywords {
    fn default() -> Self {
        Self {
            suspect: strings(&["suspect", "accused", "assassin", "shooter", "gunman"]),
            witness: strings(&["witness", "witnessed", "testimony", "saw", "observed"]),
            investigation: strings(&[
                "fbi",
                "cia",
                "police",
                "investigation",
                "commission",
                "detective",
                "agent",
                "investigator",
            ]),
            involved: strings(&["involved", "participant", "associate", "accomplice"]),
        }
    }
}

/// Configuration for the graph Assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Name (or name fragment) of the designated main subject
    pub main_subject: String,

    /// Maximum biography length (characters) before truncation
    pub bio_length: usize,

    /// File name of the connection report, written beside the graph
    pub report_file_name: String,

    /// Run the pairwise relationship pass on the rayon thread pool
    pub parallel: bool,

    /// Role keyword sets
    pub roles: RoleKeywords,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            main_subject: "Kennedy".to_string(),
            bio_length: 300,
            report_file_name: "affiliation_analysis.json".to_string(),
            parallel: true,
            roles: RoleKeywords::default(),
        }
    }
}

impl AssemblerConfig {
    /// Same configuration with the pairwise pass on the calling thread
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.main_subject.trim().is_empty() {
            return Err("main_subject must not be empty".to_string());
        }
        if self.bio_length == 0 {
            return Err("bio_length must be greater than 0".to_string());
        }
        let report = self.report_file_name.trim();
        if report.is_empty() {
            return Err("report_file_name must not be empty".to_string());
        }
        if report.contains('/') || report.contains('\\') {
            return Err("report_file_name must be a bare file name".to_string());
        }
        for (role, keywords) in [
            ("suspect", &self.roles.suspect),
            ("witness", &self.roles.witness),
            ("investigation", &self.roles.investigation),
            ("involved", &self.roles.involved),
        ] {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("{} role has an empty keyword", role));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AssemblerError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| AssemblerError::Config(e.to_string()))?;
        config.validate().map_err(AssemblerError::Config)?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, AssemblerError> {
        toml::to_string_pretty(self).map_err(|e| AssemblerError::Config(e.to_string()))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
