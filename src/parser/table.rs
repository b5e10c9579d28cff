//! ASCII table loader

use std::io::BufRead;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::model::{CellValue, Column, ColumnType, LoadedTable, Row};

use super::infer::{convert, guess_column_type};
use super::source::{lossy_lines, SourceFactory};
use super::tokenize::Tokenizer;

/// Tokens of one data line
struct RawRow {
    line: usize,
    tokens: Vec<String>,
}

/// Load a (part of a) text table from a file.
///
/// The compression flag in `options` selects how the file is opened; an
/// unknown flag fails before the file is touched.
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<LoadedTable> {
    let reader = SourceFactory::new().open(path, &options.compression)?;
    let table = load_table_from_reader(reader, options)?;
    log::info!(
        "loaded {} rows x {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

/// Load a text table from any line source
pub fn load_table_from_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<LoadedTable> {
    let raw_rows = read_rows(reader, options)?;

    let Some(first) = raw_rows.first() else {
        log::warn!("no data rows found");
        return Ok(LoadedTable::default());
    };
    let width = first.tokens.len();

    let selected = select_columns(width, options)?;
    let names = column_names(&selected, options)?;

    let types = if options.convert {
        selected
            .iter()
            .map(|&col| {
                let values = raw_rows.iter().filter_map(|r| r.tokens.get(col));
                guess_column_type(values, options.ints_as_floats)
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        vec![ColumnType::String; selected.len()]
    };

    let columns = selected
        .iter()
        .zip(names)
        .zip(&types)
        .map(|((&col, name), &ty)| Column::new(name, col, ty))
        .collect();
    let mut table = LoadedTable::new(columns);

    if let Some(&col) = options.dict_columns.iter().find(|&&c| c >= width) {
        return Err(Error::ColumnOutOfRange { column: col, width });
    }
    let key_column = options.dict_columns.iter().copied().min();

    for raw in &raw_rows {
        let cells = if options.convert {
            selected
                .iter()
                .zip(&types)
                .map(|(&col, &ty)| match raw.tokens.get(col) {
                    Some(token) => convert(token, ty),
                    None => Err(Error::ColumnOutOfRange {
                        column: col,
                        width: raw.tokens.len(),
                    }),
                })
                .collect::<Result<Vec<_>>>()?
        } else {
            selected
                .iter()
                .filter_map(|&col| raw.tokens.get(col))
                .map(|token| CellValue::String(token.clone()))
                .collect()
        };

        if let Some(key) = key_column.and_then(|col| raw.tokens.get(col)) {
            table.lookup.insert(key.clone(), table.rows.len());
        }
        table.rows.push(Row::new(cells, raw.line));
    }

    Ok(table)
}

fn starts_with_any(line: &str, prefixes: &[String]) -> bool {
    prefixes
        .iter()
        .any(|p| !p.is_empty() && line.starts_with(p.as_str()))
}

/// Filter and tokenize lines, enforcing a constant row width when asked to
fn read_rows<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Vec<RawRow>> {
    let tokenizer = Tokenizer::new()
        .with_delimiter(options.delimiter.as_str())
        .with_comment_markers(options.comment_markers.iter().cloned());
    let ignore_lines: FxHashSet<usize> = options.ignore_lines.iter().copied().collect();

    let mut rows = Vec::new();
    let mut expected_width: Option<usize> = None;

    for (idx, line) in lossy_lines(reader).enumerate() {
        let line = line?;
        let line_num = idx + 1;

        if ignore_lines.contains(&line_num) {
            log::debug!("line {}: in ignore list", line_num);
            continue;
        }
        if starts_with_any(&line, &options.comment_markers) {
            log::debug!("line {}: comment", line_num);
            continue;
        }
        if !options.data_markers.is_empty() && !starts_with_any(&line, &options.data_markers) {
            log::debug!("line {}: no data marker", line_num);
            continue;
        }

        let tokens = tokenizer.tokenize(&line).tokens;
        if tokens.is_empty() {
            continue;
        }
        log::debug!("line {}: {} tokens", line_num, tokens.len());

        if options.validate {
            match expected_width {
                None => expected_width = Some(tokens.len()),
                Some(expected) if expected != tokens.len() => {
                    return Err(Error::RowWidthMismatch {
                        line: line_num,
                        expected,
                        found: tokens.len(),
                    });
                }
                Some(_) => {}
            }
        }

        rows.push(RawRow {
            line: line_num,
            tokens,
        });
    }

    Ok(rows)
}

/// Source indices of the columns to keep, in source order
fn select_columns(width: usize, options: &LoadOptions) -> Result<Vec<usize>> {
    if !options.use_columns.is_empty() {
        let mut cols = options.use_columns.clone();
        cols.sort_unstable();
        cols.dedup();
        if let Some(&col) = cols.iter().find(|&&c| c >= width) {
            return Err(Error::ColumnOutOfRange { column: col, width });
        }
        if !options.ignore_columns.is_empty() {
            log::warn!("both use and ignore columns given; ignore columns are not applied");
        }
        return Ok(cols);
    }

    if !options.ignore_columns.is_empty() {
        let ignored: FxHashSet<usize> = options.ignore_columns.iter().copied().collect();
        return Ok((0..width).filter(|c| !ignored.contains(c)).collect());
    }

    Ok((0..width).collect())
}

fn column_names(selected: &[usize], options: &LoadOptions) -> Result<Vec<String>> {
    match &options.column_names {
        Some(names) if names.len() != selected.len() => Err(Error::InvalidArgument(format!(
            "{} column names given for {} columns",
            names.len(),
            selected.len()
        ))),
        Some(names) => Ok(names.clone()),
        None => Ok((0..selected.len()).map(|i| format!("f{}", i)).collect()),
    }
}
