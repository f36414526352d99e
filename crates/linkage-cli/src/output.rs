//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use linkage_assembler::{Assembly, OutputPaths};
use linkage_domain::{ConnectionAnalysis, Graph, NodeGroup, NodeId};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Number of nodes listed in the most-connected summary.
pub const TOP_CONNECTED: usize = 10;

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the summary of a finished build.
    pub fn build_summary(&self, assembly: &Assembly, paths: &OutputPaths) -> Result<String> {
        let graph = &assembly.graph;
        let top = top_connected(graph, TOP_CONNECTED);

        match self.format {
            OutputFormat::Quiet => Ok(paths.graph.display().to_string()),
            OutputFormat::Json => {
                let confirmed: Vec<serde_json::Value> = assembly
                    .report
                    .iter()
                    .map(|entry| {
                        serde_json::json!({
                            "name": entry.name,
                            "confidenceLevel": entry.confidence_level,
                            "score": entry.score,
                        })
                    })
                    .collect();
                let top: Vec<serde_json::Value> = top
                    .iter()
                    .map(|(id, degree)| serde_json::json!({ "id": id, "degree": degree }))
                    .collect();
                let summary = serde_json::json!({
                    "graph": paths.graph,
                    "report": paths.report,
                    "nodes": graph.nodes.len(),
                    "links": graph.links.len(),
                    "affiliatedConnections": graph.metadata.affiliated_connections,
                    "groups": graph.metadata.groups,
                    "confirmed": confirmed,
                    "topConnected": top,
                });
                Ok(serde_json::to_string_pretty(&summary)?)
            }
            OutputFormat::Table => {
                let mut sections = Vec::new();

                if assembly.report.is_empty() {
                    sections.push(self.warning("No confirmed connections."));
                } else {
                    let mut builder = Builder::default();
                    builder.push_record(["Name", "Confidence", "Score"]);
                    for entry in &assembly.report {
                        builder.push_record([
                            entry.name.clone(),
                            entry.confidence_level.to_string(),
                            format!("{:.1}", entry.score),
                        ]);
                    }
                    sections.push(self.table(builder));
                }

                let mut builder = Builder::default();
                builder.push_record(["Group", "Nodes"]);
                for group in NodeGroup::ALL {
                    builder.push_record([
                        group.to_string(),
                        graph.metadata.groups.get(group).to_string(),
                    ]);
                }
                sections.push(self.table(builder));

                if !top.is_empty() {
                    let mut builder = Builder::default();
                    builder.push_record(["Most connected", "Degree"]);
                    for (id, degree) in &top {
                        builder.push_record([id.to_string(), degree.to_string()]);
                    }
                    sections.push(self.table(builder));
                }

                sections.push(self.success(&format!(
                    "Generated {} nodes and {} links",
                    graph.nodes.len(),
                    graph.links.len()
                )));
                sections.push(self.info(&format!("Graph: {}", paths.graph.display())));
                sections.push(self.info(&format!("Report: {}", paths.report.display())));

                Ok(sections.join("\n"))
            }
        }
    }

    /// Format per-record connection analyses.
    pub fn analyses(&self, results: &[(String, ConnectionAnalysis)]) -> Result<String> {
        match self.format {
            OutputFormat::Quiet => Ok(results
                .iter()
                .filter(|(_, a)| a.has_connection)
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Json => {
                let rows: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(name, analysis)| {
                        serde_json::json!({
                            "name": name,
                            "hasConnection": analysis.has_connection,
                            "score": analysis.score,
                            "confidenceLevel": analysis.confidence_level,
                            "evidence": analysis.evidence.len(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&rows)?)
            }
            OutputFormat::Table => {
                if results.is_empty() {
                    return Ok(self.colorize("No records found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Name", "Connected", "Score", "Confidence", "Evidence"]);
                for (name, analysis) in results {
                    let connected = if analysis.has_connection { "yes" } else { "no" };
                    builder.push_record([
                        name.clone(),
                        connected.to_string(),
                        format!("{:.1}", analysis.score),
                        analysis.confidence_level.to_string(),
                        analysis.evidence.len().to_string(),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the evidence behind one record's analysis.
    pub fn evidence(&self, name: &str, analysis: &ConnectionAnalysis) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "name": name,
                "analysis": analysis,
            }))?),
            OutputFormat::Quiet => Ok(format!("{:.1}", analysis.score)),
            OutputFormat::Table => {
                let verdict = format!(
                    "{}: score {:.1}, confidence {}",
                    name, analysis.score, analysis.confidence_level
                );
                let headline = if analysis.has_connection {
                    self.success(&verdict)
                } else {
                    self.info(&verdict)
                };

                if analysis.evidence.is_empty() {
                    return Ok(format!("{}\n{}", headline, self.warning("No evidence found.")));
                }

                let mut builder = Builder::default();
                builder.push_record(["Term", "Source", "Score", "Context x", "Context"]);
                for evidence in &analysis.evidence {
                    builder.push_record([
                        evidence.term.clone(),
                        evidence.source.clone(),
                        format!("{:.1}", evidence.score),
                        format!("{:.2}", evidence.context_score),
                        linkage_assembler::truncate(&evidence.context, 60),
                    ]);
                }
                Ok(format!("{}\n{}", headline, self.table(builder)))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Nodes with the most edges (either direction), highest first
///
/// Ties keep node order. Nodes without edges are left out.
pub fn top_connected(graph: &Graph, limit: usize) -> Vec<(NodeId, usize)> {
    let mut ranked: Vec<(NodeId, usize)> = graph
        .nodes
        .iter()
        .map(|node| (node.id.clone(), graph.degree(&node.id)))
        .filter(|(_, degree)| *degree > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkage_analyzer::Lexicon;
    use linkage_assembler::{AssemblerConfig, GraphAssembler};
    use linkage_domain::Record;
    use std::path::PathBuf;

    fn assembly() -> Assembly {
        let lexicon = Lexicon::reference();
        let records = vec![
            Record::named("Yuri Nosenko").with_section(
                "Lead",
                "Met with Mossad officials and Oswald regarding intelligence matters.",
            ),
            Record::named("Lee Harvey Oswald").with_section("Lead", "No known activity."),
            Record::named("Jack Ruby").with_section("Lead", "Shot Oswald in Dallas."),
        ];
        GraphAssembler::new(&lexicon, AssemblerConfig::sequential())
            .unwrap()
            .assemble(&records)
            .unwrap()
    }

    fn paths() -> OutputPaths {
        OutputPaths {
            graph: PathBuf::from("out/network.json"),
            report: PathBuf::from("out/affiliation_analysis.json"),
        }
    }

    #[test]
    fn test_top_connected() {
        let top = top_connected(&assembly().graph, TOP_CONNECTED);
        assert_eq!(top[0].0.as_str(), "lee_harvey_oswald");
        assert_eq!(top[0].1, 2);
        assert_eq!(top.len(), 3);

        let top = top_connected(&assembly().graph, 1);
        assert_eq!(top.len(), 1);
    }

    #[test]
    fn test_top_connected_matches_graph_degree() {
        let graph = assembly().graph;
        let top = top_connected(&graph, TOP_CONNECTED);
        for (id, degree) in &top {
            assert_eq!(*degree, graph.degree(id));
        }
        // equal degrees keep node order
        let ids: Vec<&str> = top.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["lee_harvey_oswald", "yuri_nosenko", "jack_ruby"]);
    }

    #[test]
    fn test_table_summary() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.build_summary(&assembly(), &paths()).unwrap();
        assert!(output.contains("Yuri Nosenko"));
        assert!(output.contains("very_high"));
        assert!(output.contains("Most connected"));
        assert!(output.contains("✓ Generated 3 nodes and 2 links"));
    }

    #[test]
    fn test_json_summary() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.build_summary(&assembly(), &paths()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["links"], 2);
        assert_eq!(value["confirmed"][0]["name"], "Yuri Nosenko");
        assert_eq!(value["topConnected"][0]["id"], "lee_harvey_oswald");
    }

    #[test]
    fn test_quiet_summary() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.build_summary(&assembly(), &paths()).unwrap();
        assert_eq!(output, PathBuf::from("out/network.json").display().to_string());
    }

    #[test]
    fn test_evidence_table() {
        let lexicon = Lexicon::reference();
        let record = Record::named("Yuri Nosenko").with_section("Lead", "Met with Mossad officials.");
        let analysis = linkage_analyzer::ConnectionAnalyzer::new(&lexicon).analyze_record(&record);

        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.evidence("Yuri Nosenko", &analysis).unwrap();
        assert!(output.contains("Mossad"));
        assert!(output.contains("article_sections.Lead"));
    }

    #[test]
    fn test_empty_analyses() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.analyses(&[]).unwrap();
        assert!(output.contains("No records found"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
