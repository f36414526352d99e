//! Reading input records and writing the output documents

use crate::assembler::Assembly;
use crate::error::AssemblerError;
use linkage_domain::Record;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Where a build wrote its documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// Graph document
    pub graph: PathBuf,
    /// Connection report, in the graph's directory
    pub report: PathBuf,
}

/// Parse a JSON array of records
///
/// A record whose `name` is missing or not a string fails the whole batch
/// with its index. Other fields are lenient: wrong-typed values are dropped.
pub fn parse_records(json: &str) -> Result<Vec<Record>, AssemblerError> {
    let value: Value = serde_json::from_str(json)?;
    let Value::Array(items) = value else {
        return Err(AssemblerError::InvalidInput(
            "expected a JSON array of records".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !matches!(item.get("name"), Some(Value::String(_))) {
                return Err(AssemblerError::MissingName { index });
            }
            serde_json::from_value(item)
                .map_err(|e| AssemblerError::InvalidInput(format!("record {}: {}", index, e)))
        })
        .collect()
}

/// Read and parse a records file
pub fn read_records(path: &Path) -> Result<Vec<Record>, AssemblerError> {
    let json = fs::read_to_string(path).map_err(|source| AssemblerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = parse_records(&json)?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write the graph to `graph_path` and the report beside it
///
/// Missing parent directories are created. Both files are pretty-printed.
/// Both documents are serialized and staged in temporary files first; the
/// existing files are only replaced once both stages succeeded, report
/// before graph.
pub fn write_outputs(
    assembly: &Assembly,
    graph_path: &Path,
    report_file_name: &str,
) -> Result<OutputPaths, AssemblerError> {
    let graph_json = serde_json::to_string_pretty(&assembly.graph)?;
    let report_json = serde_json::to_string_pretty(&assembly.report)?;

    let dir = match graph_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| AssemblerError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let report_path = dir.join(report_file_name);
    for target in [graph_path, report_path.as_path()] {
        if target.is_dir() {
            return Err(AssemblerError::Io {
                path: target.to_path_buf(),
                source: io::Error::other("output path is a directory"),
            });
        }
    }

    let staged_graph = stage(dir, &graph_json)?;
    let staged_report = stage(dir, &report_json)?;
    debug!("Staged both documents in {}", dir.display());

    // Dropped stages delete their temporary files.
    commit(staged_report, &report_path)?;
    commit(staged_graph, graph_path)?;

    info!("Graph data written to {}", graph_path.display());
    info!("Connection report written to {}", report_path.display());

    Ok(OutputPaths {
        graph: graph_path.to_path_buf(),
        report: report_path,
    })
}

fn stage(dir: &Path, contents: &str) -> Result<NamedTempFile, AssemblerError> {
    let io_error = |source: io::Error| AssemblerError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    file.write_all(contents.as_bytes()).map_err(io_error)?;
    file.as_file().sync_all().map_err(io_error)?;
    Ok(file)
}

fn commit(staged: NamedTempFile, path: &Path) -> Result<(), AssemblerError> {
    staged.persist(path).map_err(|e| AssemblerError::Io {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
