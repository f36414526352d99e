//! Lexicon command implementation.

use crate::cli::LexiconArgs;
use crate::config::OutputFormat;
use crate::error::Result;
use linkage_analyzer::Lexicon;

/// Execute the lexicon command.
pub fn execute_lexicon(args: LexiconArgs, format: OutputFormat) -> Result<()> {
    println!("{}", render_lexicon(&args.preset.into(), format)?);
    Ok(())
}

/// Render a lexicon as JSON in `json` format, TOML otherwise.
pub fn render_lexicon(lexicon: &Lexicon, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(lexicon)?),
        OutputFormat::Table | OutputFormat::Quiet => Ok(lexicon.to_toml()?),
    }
}
