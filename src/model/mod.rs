//! Data model for loaded tables

mod schema;
mod table;

pub use schema::{Column, ColumnType, STRING_TAG_WIDTH};
pub use table::{CellValue, LoadedTable, Row};
