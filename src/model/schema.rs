//! Column metadata and type information

use serde::{Deserialize, Serialize};

/// Width of the string tag used in record layouts
pub const STRING_TAG_WIDTH: usize = 20;

/// Guessed type of a value or a column.
///
/// Variants are ordered by generality: a column mixing types takes the
/// most general one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    Int,
    Float,
    String,
}

impl ColumnType {
    /// Widen the type to accommodate another type
    pub fn widen(self, other: ColumnType) -> ColumnType {
        self.max(other)
    }

    /// Record-layout descriptor for the type
    pub fn dtype(&self) -> String {
        match self {
            ColumnType::Int => "i8".to_string(),
            ColumnType::Float => "f8".to_string(),
            ColumnType::String => format!("a{}", STRING_TAG_WIDTH),
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnType::Int => write!(f, "int"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::String => write!(f, "string"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Position of the column in the source rows (0-based)
    pub source_index: usize,
    /// Type of every cell in the column
    pub column_type: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, source_index: usize, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            source_index,
            column_type,
        }
    }
}
