//! tabwrangle - helpers for scientific data wrangling
//!
//! Tokenizing and loading ASCII tables with per-column type guessing,
//! key/value parameter files, equal-width binning of numeric rows and
//! linear merges of presorted sequences.

pub mod config;
pub mod error;
pub mod model;
pub mod ops;
pub mod output;
pub mod parser;

pub use config::{DictOptions, LoadOptions};
pub use error::{Error, Result};
pub use model::{CellValue, ColumnType, LoadedTable};
pub use ops::{bin_rows, merge_sorted};
pub use parser::{build_dict, guess_type, load_table, Tokenizer};
