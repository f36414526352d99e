//! Integration tests for linkage-cli
//!
//! These tests drive the command layer against files in a temporary directory.

use linkage_cli::cli::{AnalyzeArgs, BuildArgs};
use linkage_cli::commands::build::run_build;
use linkage_cli::commands::execute_analyze;
use linkage_cli::config::{Config, OutputFormat};
use linkage_cli::{CliError, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

const PEOPLE: &str = r#"[
    {
        "name": "Yuri Nosenko",
        "url": "https://en.wikipedia.org/wiki/Yuri_Nosenko",
        "infobox": {"Born": "October 30, 1927", "Occupation": "Intelligence officer"},
        "article_sections": {"Lead": "Met with Mossad officials and Oswald regarding intelligence matters."}
    },
    {
        "name": "Lee Harvey Oswald",
        "article_sections": {"Lead": "No known activity."}
    },
    {"name": "John Doe"}
]"#;

fn write_people(dir: &Path) -> PathBuf {
    let path = dir.join("people.json");
    fs::write(&path, PEOPLE).unwrap();
    path
}

fn build_args(input: PathBuf, output: Option<PathBuf>) -> BuildArgs {
    BuildArgs {
        input,
        output,
        lexicon: None,
        sequential: false,
    }
}

#[test]
fn test_build_writes_both_documents() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_people(temp_dir.path());
    let output = temp_dir.path().join("site").join("network.json");

    let (assembly, paths) = run_build(build_args(input, Some(output.clone())), &Config::default()).unwrap();
    assert_eq!(paths.graph, output);
    assert!(paths.graph.exists());
    assert!(paths.report.exists());
    assert_eq!(assembly.graph.nodes.len(), 3);
    assert_eq!(assembly.graph.links.len(), 1);

    let graph: serde_json::Value = serde_json::from_str(&fs::read_to_string(&paths.graph).unwrap()).unwrap();
    assert_eq!(graph["nodes"][0]["url"], "https://en.wikipedia.org/wiki/Yuri_Nosenko");
    assert_eq!(graph["nodes"][0]["occupation"], "Intelligence officer");
    assert_eq!(graph["links"][0]["source"], "yuri_nosenko");
}

#[test]
fn test_build_uses_configured_output_and_lexicon() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_people(temp_dir.path());

    let lexicon_path = temp_dir.path().join("kgb.toml");
    let mut lexicon = linkage_analyzer::Lexicon::reference();
    lexicon.primary_terms = vec![linkage_analyzer::Term::new("KGB", 10.0)];
    lexicon.secondary_terms.clear();
    fs::write(&lexicon_path, lexicon.to_toml().unwrap()).unwrap();

    let mut config = Config::default();
    config.build.output = Some(temp_dir.path().join("configured.json"));
    config.build.lexicon = Some(lexicon_path);

    let (assembly, paths) = run_build(build_args(input, None), &config).unwrap();
    assert_eq!(paths.graph, temp_dir.path().join("configured.json"));
    assert!(assembly.report.is_empty());
    assert_eq!(assembly.graph.metadata.affiliated_connections, 0);
}

#[test]
fn test_build_missing_input_fails_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = temp_dir.path().join("out").join("network.json");

    let result = run_build(
        build_args(temp_dir.path().join("absent.json"), Some(output.clone())),
        &Config::default(),
    );
    assert!(matches!(result, Err(CliError::Assembler(_))));
    assert!(!output.exists());
}

#[test]
fn test_build_invalid_lexicon_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_people(temp_dir.path());
    let lexicon_path = temp_dir.path().join("broken.toml");
    fs::write(&lexicon_path, "connection_threshold = \"high\"\n").unwrap();

    let mut args = build_args(input, Some(temp_dir.path().join("network.json")));
    args.lexicon = Some(lexicon_path);
    assert!(matches!(run_build(args, &Config::default()), Err(CliError::Analyzer(_))));
}

#[test]
fn test_analyze_unknown_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = write_people(temp_dir.path());
    let formatter = Formatter::new(OutputFormat::Quiet, false);

    let args = AnalyzeArgs {
        input: input.clone(),
        name: Some("Nobody".to_string()),
        lexicon: None,
    };
    assert!(matches!(
        execute_analyze(args, &Config::default(), &formatter),
        Err(CliError::InvalidInput(_))
    ));

    let args = AnalyzeArgs {
        input,
        name: Some("yuri nosenko".to_string()),
        lexicon: None,
    };
    assert!(execute_analyze(args, &Config::default(), &formatter).is_ok());
}
