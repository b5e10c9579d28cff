//! Configuration handling for table loading and key/value files

/// Output format for rendered results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Options for loading an ASCII table
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Compression flag: "" for plain text, "gz" for gzip
    pub compression: String,
    /// Field delimiter; empty means runs of whitespace
    pub delimiter: String,
    /// Comment markers; a line starting with one is skipped entirely
    pub comment_markers: Vec<String>,
    /// If non-empty, only lines starting with one of these are data rows
    pub data_markers: Vec<String>,
    /// Physical line numbers (1-based) to skip
    pub ignore_lines: Vec<usize>,
    /// Columns to keep; takes precedence over `ignore_columns`
    pub use_columns: Vec<usize>,
    /// Columns to drop
    pub ignore_columns: Vec<usize>,
    /// Columns identifying a row; the first one keys the row lookup
    pub dict_columns: Vec<usize>,
    /// Require every row to have the same number of fields
    pub validate: bool,
    /// Convert cells to their guessed column types
    pub convert: bool,
    /// Treat integer-looking values as floats when converting
    pub ints_as_floats: bool,
    /// Names for the selected columns
    pub column_names: Option<Vec<String>>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            compression: String::new(),
            delimiter: String::new(),
            comment_markers: vec!["#".to_string()],
            data_markers: Vec::new(),
            ignore_lines: Vec::new(),
            use_columns: Vec::new(),
            ignore_columns: Vec::new(),
            dict_columns: Vec::new(),
            validate: true,
            convert: false,
            ints_as_floats: false,
            column_names: None,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compression flag ("" or "gz")
    pub fn with_compression(mut self, compression: impl Into<String>) -> Self {
        self.compression = compression.into();
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replace the comment markers
    pub fn with_comment_markers(mut self, markers: Vec<String>) -> Self {
        self.comment_markers = markers;
        self
    }

    /// Restrict rows to lines starting with one of these prefixes
    pub fn with_data_markers(mut self, markers: Vec<String>) -> Self {
        self.data_markers = markers;
        self
    }

    /// Skip these physical line numbers
    pub fn with_ignore_lines(mut self, lines: Vec<usize>) -> Self {
        self.ignore_lines = lines;
        self
    }

    /// Keep only these columns
    pub fn with_use_columns(mut self, columns: Vec<usize>) -> Self {
        self.use_columns = columns;
        self
    }

    /// Drop these columns
    pub fn with_ignore_columns(mut self, columns: Vec<usize>) -> Self {
        self.ignore_columns = columns;
        self
    }

    /// Build a row lookup from these columns
    pub fn with_dict_columns(mut self, columns: Vec<usize>) -> Self {
        self.dict_columns = columns;
        self
    }

    /// Enable or disable row width validation
    pub fn with_validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    /// Enable typed conversion
    pub fn with_convert(mut self, convert: bool) -> Self {
        self.convert = convert;
        self
    }

    /// Force integer columns to float
    pub fn with_ints_as_floats(mut self, ints_as_floats: bool) -> Self {
        self.ints_as_floats = ints_as_floats;
        self
    }

    /// Name the selected columns
    pub fn with_column_names(mut self, names: Vec<String>) -> Self {
        self.column_names = Some(names);
        self
    }
}

/// Options for building a key/value map
#[derive(Debug, Clone)]
pub struct DictOptions {
    /// Separator between key and value
    pub delimiter: String,
    /// Markers starting a trailing comment
    pub comment_markers: Vec<String>,
    /// Line fragment opening a block of entries
    pub start_marker: Option<String>,
    /// Line fragment closing a block of entries
    pub end_marker: Option<String>,
}

impl Default for DictOptions {
    fn default() -> Self {
        Self {
            delimiter: "=".to_string(),
            comment_markers: vec!["#".to_string()],
            start_marker: None,
            end_marker: None,
        }
    }
}

impl DictOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_comment_markers(mut self, markers: Vec<String>) -> Self {
        self.comment_markers = markers;
        self
    }

    /// Only read entries between lines containing `start` and `end`
    pub fn with_block(mut self, start: impl Into<String>, end: Option<String>) -> Self {
        self.start_marker = Some(start.into());
        self.end_marker = end;
        self
    }
}
