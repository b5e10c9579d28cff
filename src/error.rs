//! Error types shared by the library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported compression extension: {0:?}")]
    UnsupportedCompression(String),

    #[error("Row width mismatch on line {line}: expected {expected} fields, found {found}")]
    RowWidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Column {column} is out of range for rows of width {width}")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Type inference failed: {0}")]
    TypeInference(String),
}

pub type Result<T> = std::result::Result<T, Error>;
