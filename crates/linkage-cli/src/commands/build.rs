//! Build command implementation.

use crate::cli::BuildArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{top_connected, Formatter, TOP_CONNECTED};
use linkage_assembler::{read_records, write_outputs, Assembly, GraphAssembler, OutputPaths};
use tracing::info;

/// Execute the build command.
pub fn execute_build(args: BuildArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (assembly, paths) = run_build(args, config)?;
    println!("{}", formatter.build_summary(&assembly, &paths)?);
    Ok(())
}

/// Run the pipeline and write both documents.
pub fn run_build(args: BuildArgs, config: &Config) -> Result<(Assembly, OutputPaths)> {
    let lexicon = config.lexicon(args.lexicon.as_deref())?;

    let mut assembler_config = config.assembler.clone();
    if args.sequential {
        assembler_config.parallel = false;
    }

    let records = read_records(&args.input)?;
    let assembler = GraphAssembler::new(&lexicon, assembler_config)?;
    let assembly = assembler.assemble(&records)?;

    let output = config.output_path(args.output);
    let paths = write_outputs(&assembly, &output, &assembler.config().report_file_name)?;

    for (id, degree) in top_connected(&assembly.graph, TOP_CONNECTED) {
        info!("Most connected: {} ({} links)", id, degree);
    }

    Ok((assembly, paths))
}
