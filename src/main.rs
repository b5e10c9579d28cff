//! tabwrangle - command line front end for the wrangling helpers

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use tabwrangle::config::{DictOptions, LoadOptions, OutputFormat};
use tabwrangle::ops::{bin_edges, bin_rows, merge_sorted};
use tabwrangle::output::{render_to_stdout, BinSummary, Report};
use tabwrangle::parser::{build_dict, load_table};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

/// Load, bin and compare ASCII data tables
#[derive(Parser, Debug)]
#[command(name = "tabwrangle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal", global = true)]
    format: CliOutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load a text table
    Load {
        file: PathBuf,
        #[command(flatten)]
        table: TableArgs,
    },
    /// Read key/value pairs from a parameter file
    Dict(DictArgs),
    /// Bin table rows on one numeric column
    Bin(BinArgs),
    /// Compare one column of two presorted tables
    Merge(MergeArgs),
}

/// Options shared by every command that reads a table
#[derive(Args, Debug)]
struct TableArgs {
    /// Compression of the input ("" for plain text, "gz" for gzip)
    #[arg(long, default_value = "")]
    compression: String,

    /// Field delimiter (default: runs of whitespace)
    #[arg(short, long, default_value = "")]
    delimiter: String,

    /// Comment marker(s); lines starting with one are skipped
    #[arg(long = "comment", default_value = "#")]
    comments: Vec<String>,

    /// Only read lines starting with one of these prefixes
    #[arg(long = "data-marker")]
    data_markers: Vec<String>,

    /// Line numbers (1-based) to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    ignore_lines: Vec<usize>,

    /// Columns to keep (comma-separated)
    #[arg(long, value_delimiter = ',')]
    use_cols: Vec<usize>,

    /// Columns to drop (comma-separated)
    #[arg(long, value_delimiter = ',')]
    ignore_cols: Vec<usize>,

    /// Columns identifying a row (comma-separated)
    #[arg(long, value_delimiter = ',')]
    dict_cols: Vec<usize>,

    /// Accept rows of different widths
    #[arg(long)]
    no_validate: bool,

    /// Convert cells to guessed types
    #[arg(long)]
    convert: bool,

    /// Read integer columns as floats
    #[arg(long)]
    ints_as_floats: bool,

    /// Names for the selected columns (comma-separated)
    #[arg(long, value_delimiter = ',')]
    names: Vec<String>,
}

impl TableArgs {
    fn to_options(&self) -> LoadOptions {
        let mut options = LoadOptions::new()
            .with_compression(self.compression.as_str())
            .with_delimiter(self.delimiter.as_str())
            .with_comment_markers(self.comments.clone())
            .with_data_markers(self.data_markers.clone())
            .with_ignore_lines(self.ignore_lines.clone())
            .with_use_columns(self.use_cols.clone())
            .with_ignore_columns(self.ignore_cols.clone())
            .with_dict_columns(self.dict_cols.clone())
            .with_validate(!self.no_validate)
            .with_convert(self.convert)
            .with_ints_as_floats(self.ints_as_floats);
        if !self.names.is_empty() {
            options = options.with_column_names(self.names.clone());
        }
        options
    }
}

#[derive(Args, Debug)]
struct DictArgs {
    file: PathBuf,

    /// Separator between key and value (empty: whitespace)
    #[arg(short, long, default_value = "=")]
    delimiter: String,

    /// Comment marker(s)
    #[arg(long = "comment", default_value = "#")]
    comments: Vec<String>,

    /// Only read lines from one containing this marker...
    #[arg(long)]
    start: Option<String>,

    /// ...up to one containing this marker
    #[arg(long, requires = "start")]
    end: Option<String>,
}

#[derive(Args, Debug)]
struct BinArgs {
    file: PathBuf,

    /// Column (after selection) holding the binning variable
    #[arg(long)]
    column: usize,

    /// Bin width
    #[arg(long)]
    width: f64,

    /// Lower edge of the first bin
    #[arg(long, allow_hyphen_values = true)]
    min: f64,

    /// Upper edge of the last bin
    #[arg(long, allow_hyphen_values = true)]
    max: f64,

    #[command(flatten)]
    table: TableArgs,
}

#[derive(Args, Debug)]
struct MergeArgs {
    a: PathBuf,
    b: PathBuf,

    /// Column (after selection) to compare
    #[arg(long, default_value_t = 0)]
    column: usize,

    /// Sort and de-duplicate both columns first
    #[arg(long)]
    sort: bool,

    #[command(flatten)]
    table: TableArgs,
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format.into();

    match cli.command {
        Command::Load { file, table } => {
            let loaded = load_table(&file, &table.to_options())
                .with_context(|| format!("Failed to load table: {}", file.display()))?;
            render_to_stdout(&Report::Table(&loaded), format)
        }
        Command::Dict(args) => {
            let mut options = DictOptions::new()
                .with_delimiter(args.delimiter.as_str())
                .with_comment_markers(args.comments);
            if let Some(start) = args.start {
                options = options.with_block(start, args.end);
            }
            let dict = build_dict(&args.file, &options)
                .with_context(|| format!("Failed to read parameters: {}", args.file.display()))?;
            render_to_stdout(&Report::Dict(&dict), format)
        }
        Command::Bin(args) => {
            let rows = numeric_rows(&args.file, &args.table)?;
            let bins = bin_rows(&rows, args.column, args.width, args.min, args.max)?;
            let edges = bin_edges(args.min, args.max, bins.len());
            let summary: Vec<BinSummary> = bins
                .iter()
                .enumerate()
                .map(|(i, bin)| BinSummary {
                    index: i,
                    lower: edges[i],
                    upper: edges[i + 1],
                    count: bin.len(),
                })
                .collect();
            render_to_stdout(&Report::Bins(&summary), format)
        }
        Command::Merge(args) => {
            let a = numeric_column(&args.a, &args.table, args.column, args.sort)?;
            let b = numeric_column(&args.b, &args.table, args.column, args.sort)?;
            let merged = merge_sorted(&a, &b)?;
            render_to_stdout(&Report::Merge(&merged), format)
        }
    }
}

/// Load a table as floats, failing on any non-numeric column
fn numeric_rows(path: &Path, args: &TableArgs) -> Result<Vec<Vec<f64>>> {
    let options = args.to_options().with_convert(true).with_ints_as_floats(true);
    let table = load_table(path, &options)
        .with_context(|| format!("Failed to load table: {}", path.display()))?;
    match table.numeric_rows() {
        Some(rows) => Ok(rows),
        None => bail!("{} has non-numeric columns", path.display()),
    }
}

fn numeric_column(path: &Path, args: &TableArgs, column: usize, sort: bool) -> Result<Vec<f64>> {
    let rows = numeric_rows(path, args)?;
    let mut values = rows
        .iter()
        .map(|row| row.get(column).copied())
        .collect::<Option<Vec<f64>>>()
        .with_context(|| format!("{} has no column {}", path.display(), column))?;
    if sort {
        values.sort_by(f64::total_cmp);
        values.dedup();
    }
    Ok(values)
}
