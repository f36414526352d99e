//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use linkage_analyzer::Lexicon;
use linkage_assembler::AssemblerConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Graph document path used when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT: &str = "public/data/network.json";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Build defaults
    #[serde(default)]
    pub build: BuildDefaults,

    /// Assembler options (role keywords, main subject, ...)
    #[serde(default)]
    pub assembler: AssemblerConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Defaults for `build` and `analyze`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildDefaults {
    /// Lexicon file used when `--lexicon` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,

    /// Graph document path used when no output argument is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Get the default configuration file path, if there is a home directory.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".linkage").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults when absent.
    pub fn load() -> Result<Self> {
        Self::load_optional(Self::path().as_deref())
    }

    /// Load configuration from `path`, or defaults when there is no path.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                debug!("No home directory, using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a file, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.assembler.validate().map_err(CliError::Config)?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Graph document path: argument, then config, then [`DEFAULT_OUTPUT`].
    pub fn output_path(&self, arg: Option<PathBuf>) -> PathBuf {
        arg.or_else(|| self.build.output.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Lexicon to use: argument file, then config file, then the reference preset.
    pub fn lexicon(&self, arg: Option<&Path>) -> Result<Lexicon> {
        match arg.or(self.build.lexicon.as_deref()) {
            Some(path) => load_lexicon(path),
            None => Ok(Lexicon::reference()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
        }
    }
}

/// Load a lexicon file; `.json` files are read as JSON, anything else as TOML.
pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let lexicon = if is_json {
        Lexicon::from_json(&contents)?
    } else {
        Lexicon::from_toml(&contents)?
    };
    Ok(lexicon)
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.output_path(None), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_load_without_home_uses_defaults() {
        let config = Config::load_optional(None).unwrap();
        assert!(config.settings.color);
        assert_eq!(config.output_path(None), PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_load_optional_reads_given_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        let mut config = Config::default();
        config.settings.color = false;
        config.save_to(&path).unwrap();

        let loaded = Config::load_optional(Some(&path)).unwrap();
        assert!(!loaded.settings.color);
    }

    #[test]
    fn test_output_path_precedence() {
        let mut config = Config::default();
        config.build.output = Some(PathBuf::from("site/graph.json"));
        assert_eq!(config.output_path(None), PathBuf::from("site/graph.json"));
        assert_eq!(
            config.output_path(Some(PathBuf::from("cli.json"))),
            PathBuf::from("cli.json")
        );
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(config.build.lexicon.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join(".linkage").join("config.toml");

        let mut config = Config::default();
        config.settings.color = false;
        config.assembler.main_subject = "Lincoln".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert!(!loaded.settings.color);
        assert_eq!(loaded.assembler.main_subject, "Lincoln");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[settings]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert!(config.assembler.parallel);
    }

    #[test]
    fn test_load_lexicon_by_extension() {
        let temp_dir = tempfile::tempdir().unwrap();
        let toml_path = temp_dir.path().join("strict.toml");
        fs::write(&toml_path, Lexicon::strict().to_toml().unwrap()).unwrap();
        assert_eq!(load_lexicon(&toml_path).unwrap(), Lexicon::strict());

        let json_path = temp_dir.path().join("lenient.json");
        fs::write(&json_path, serde_json::to_string(&Lexicon::lenient()).unwrap()).unwrap();
        assert_eq!(load_lexicon(&json_path).unwrap(), Lexicon::lenient());
    }
}
