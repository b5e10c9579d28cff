//! Parser layer: tokenizing, type guessing and reading text files

mod infer;
mod keyvalue;
mod source;
mod table;
mod tokenize;

pub use self::infer::{convert, guess_column_type, guess_type};
pub use self::keyvalue::{build_dict, build_dict_from_reader};
pub use self::source::{GzipSource, PlainSource, Source, SourceFactory};
pub use self::table::{load_table, load_table_from_reader};
pub use self::tokenize::{TokenizedLine, Tokenizer};
