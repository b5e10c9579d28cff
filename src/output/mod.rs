//! Output formatting for loaded tables, maps, bins and merges

mod csv;
mod json;
mod terminal;

use std::io::Write;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::config::OutputFormat;
use crate::model::LoadedTable;
use crate::ops::MergedElements;

pub use self::csv::CsvOutput;
pub use self::json::JsonOutput;
pub use self::terminal::TerminalOutput;

/// Occupancy of one bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinSummary {
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Anything the command line can print
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Report<'a> {
    Table(&'a LoadedTable),
    Dict(&'a IndexMap<String, String>),
    Bins(&'a [BinSummary]),
    Merge(&'a MergedElements<f64>),
}

impl Report<'_> {
    /// Header and rows of the report as plain strings
    pub fn grid(&self) -> (Vec<String>, Vec<Vec<String>>) {
        match self {
            Report::Table(table) => {
                let headers = table.columns.iter().map(|c| c.name.clone()).collect();
                let rows = table
                    .rows
                    .iter()
                    .map(|row| row.cells.iter().map(|c| c.display().into_owned()).collect())
                    .collect();
                (headers, rows)
            }
            Report::Dict(dict) => {
                let rows = dict
                    .iter()
                    .map(|(k, v)| vec![k.clone(), v.clone()])
                    .collect();
                (vec!["key".to_string(), "value".to_string()], rows)
            }
            Report::Bins(bins) => {
                let headers = ["bin", "lower", "upper", "count"]
                    .iter()
                    .map(|h| h.to_string())
                    .collect();
                let rows = bins
                    .iter()
                    .map(|b| {
                        vec![
                            b.index.to_string(),
                            b.lower.to_string(),
                            b.upper.to_string(),
                            b.count.to_string(),
                        ]
                    })
                    .collect();
                (headers, rows)
            }
            Report::Merge(merge) => {
                let tagged = |tag: &str, values: &[f64]| -> Vec<Vec<String>> {
                    values
                        .iter()
                        .map(|v| vec![tag.to_string(), v.to_string()])
                        .collect()
                };
                let mut rows = tagged("only_a", &merge.only_a);
                rows.extend(tagged("only_b", &merge.only_b));
                rows.extend(tagged("common", &merge.common));
                (vec!["set".to_string(), "value".to_string()], rows)
            }
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Render a report to a writer
    fn render(&self, report: &Report<'_>, writer: &mut dyn Write) -> Result<()>;
}

/// Factory for creating output formatters
pub struct OutputFactory;

impl OutputFactory {
    /// Create an output formatter based on format type
    pub fn create(format: OutputFormat) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Terminal => Box::new(TerminalOutput::new()),
            OutputFormat::Json => Box::new(JsonOutput::new()),
            OutputFormat::Csv => Box::new(CsvOutput::new()),
        }
    }
}

/// Render a report to stdout
pub fn render_to_stdout(report: &Report<'_>, format: OutputFormat) -> Result<()> {
    let formatter = OutputFactory::create(format);
    let mut stdout = std::io::stdout();
    formatter.render(report, &mut stdout)
}
