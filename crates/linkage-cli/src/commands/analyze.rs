//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use linkage_analyzer::ConnectionAnalyzer;
use linkage_assembler::read_records;
use linkage_domain::ConnectionAnalysis;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let lexicon = config.lexicon(args.lexicon.as_deref())?;
    let records = read_records(&args.input)?;
    let analyzer = ConnectionAnalyzer::new(&lexicon);

    match args.name {
        Some(name) => {
            let record = records
                .iter()
                .find(|r| r.name == name)
                .or_else(|| records.iter().find(|r| r.name.eq_ignore_ascii_case(&name)))
                .ok_or_else(|| CliError::InvalidInput(format!("No record named '{}'", name)))?;
            let analysis = analyzer.analyze_record(record);
            println!("{}", formatter.evidence(&record.name, &analysis)?);
        }
        None => {
            let results: Vec<(String, ConnectionAnalysis)> = records
                .iter()
                .map(|r| (r.name.clone(), analyzer.analyze_record(r)))
                .collect();
            println!("{}", formatter.analyses(&results)?);
        }
    }

    Ok(())
}
