//! Command-line interface for inspecting record data.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;

use crate::error::Result;
use crate::record::{parse_records, ClarinFcsRecordParser, LegacyRecordParser, RecordDataParser};
use crate::types::{DataView, DataViewKind, RecordData, Resource};

/// CLARIN-FCS record data parser - inspect Resource and KWIC records.
#[derive(Parser)]
#[command(name = "fcs-record")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse all records in an XML file (a bare record or an SRU response).
    Parse {
        /// XML file to read
        file: PathBuf,

        /// Record schema to accept
        #[arg(short, long, value_enum, default_value_t = SchemaChoice::Auto)]
        schema: SchemaChoice,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,
    },

    /// List the supported record schemas.
    Schemas,
}

/// Which record parsers to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SchemaChoice {
    /// Route each record by its namespace
    Auto,
    /// Only CLARIN-FCS resource records
    Fcs,
    /// Only legacy FCS 1.0 records
    Legacy,
}

impl SchemaChoice {
    fn parsers(self) -> Vec<Box<dyn RecordDataParser>> {
        match self {
            SchemaChoice::Auto => crate::record::default_parsers(),
            SchemaChoice::Fcs => vec![Box::new(ClarinFcsRecordParser::new())],
            SchemaChoice::Legacy => vec![Box::new(LegacyRecordParser::new())],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tree
    Summary,
    /// YAML document
    Yaml,
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            schema,
            format,
        } => parse_command(&file, schema, format),
        Commands::Schemas => {
            for parser in crate::record::default_parsers() {
                println!("{}", parser.record_schema());
            }
            Ok(())
        }
    }
}

/// Execute the parse command.
fn parse_command(file: &Path, schema: SchemaChoice, format: OutputFormat) -> Result<()> {
    let xml = std::fs::read_to_string(file)?;
    let doc = roxmltree::Document::parse(&xml)?;
    let records = parse_records(&schema.parsers(), &doc)?;

    if records.is_empty() {
        eprintln!(
            "{} no records found in {}",
            style("Warning:").yellow().bold(),
            file.display()
        );
        return Ok(());
    }

    match format {
        OutputFormat::Summary => print!("{}", render_summary(&records)),
        OutputFormat::Yaml => print!("{}", serde_yaml_ng::to_string(&records)?),
    }
    Ok(())
}

/// Render records as an indented, human-readable tree.
pub fn render_summary(records: &[RecordData]) -> String {
    let mut lines = Vec::new();

    for (index, record) in records.iter().enumerate() {
        lines.push(format!(
            "{} {} ({})",
            style("Record").bold(),
            index + 1,
            style(record.record_schema()).dim()
        ));
        match record {
            RecordData::Fcs(data) => render_resource(data.resource(), &mut lines),
            RecordData::Legacy(data) => {
                if let Some(pid) = data.pid() {
                    lines.push(format!("  pid: {}", style(pid).cyan()));
                }
                lines.push(format!(
                    "  kwic: {}",
                    render_kwic(data.left(), data.keyword(), data.right())
                ));
            }
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_resource(resource: &Resource, lines: &mut Vec<String>) {
    if let Some(pid) = resource.pid() {
        lines.push(format!("  pid: {}", style(pid).cyan()));
    }
    if let Some(reference) = resource.reference() {
        lines.push(format!("  ref: {reference}"));
    }
    for view in resource.data_views().unwrap_or_default() {
        lines.push(format!("  {}", render_data_view(view)));
    }
    for fragment in resource.resource_fragments().unwrap_or_default() {
        let mut header = String::from("  ResourceFragment");
        if let Some(pid) = fragment.pid() {
            header.push_str(&format!(" pid={pid}"));
        }
        if let Some(reference) = fragment.reference() {
            header.push_str(&format!(" ref={reference}"));
        }
        lines.push(header);
        for view in fragment.data_views().unwrap_or_default() {
            lines.push(format!("    {}", render_data_view(view)));
        }
    }
}

fn render_data_view(view: &DataView) -> String {
    let body = match view.kind() {
        DataViewKind::Kwic(kwic) => render_kwic(kwic.left(), kwic.keyword(), kwic.right()),
        DataViewKind::Generic(generic) => {
            let count = generic.fragment().nodes().len();
            format!("{count} captured node(s)")
        }
    };
    format!("DataView {}: {body}", style(view.mime_type()).green())
}

fn render_kwic(left: &str, keyword: &str, right: &str) -> String {
    let keyword = format!("[{keyword}]");
    [left, keyword.as_str(), right]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}
