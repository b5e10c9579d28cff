//! Type guessing for string values and columns

use crate::error::{Error, Result};
use crate::model::{CellValue, ColumnType};

/// Guess the type of `s` and convert it.
///
/// Integers are tried first, then floats; anything else stays a string.
/// With `ints_as_floats` an integer-looking value becomes a float.
pub fn guess_type(s: &str, ints_as_floats: bool) -> (ColumnType, CellValue) {
    let trimmed = s.trim();

    if let Ok(i) = trimmed.parse::<i64>() {
        return if ints_as_floats {
            (ColumnType::Float, CellValue::Float(i as f64))
        } else {
            (ColumnType::Int, CellValue::Int(i))
        };
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return (ColumnType::Float, CellValue::Float(f));
    }

    (ColumnType::String, CellValue::String(s.to_string()))
}

/// Guess one type for a whole column of strings.
///
/// A string anywhere makes the column a string column; otherwise a float
/// anywhere makes it a float column.
pub fn guess_column_type<I, S>(values: I, ints_as_floats: bool) -> Result<ColumnType>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| guess_type(v.as_ref(), ints_as_floats).0)
        .reduce(ColumnType::widen)
        .ok_or_else(|| Error::TypeInference("no values to guess a column type from".to_string()))
}

/// Convert a raw string into a cell of the given column type
pub fn convert(s: &str, column_type: ColumnType) -> Result<CellValue> {
    let trimmed = s.trim();
    match column_type {
        ColumnType::Int => trimmed.parse::<i64>().map(CellValue::Int).map_err(|_| {
            Error::TypeInference(format!("{:?} is not an integer", s))
        }),
        ColumnType::Float => trimmed.parse::<f64>().map(CellValue::Float).map_err(|_| {
            Error::TypeInference(format!("{:?} is not a number", s))
        }),
        ColumnType::String => Ok(CellValue::String(s.to_string())),
    }
}
