//! Box-drawn terminal output

use std::io::Write;

use anyhow::Result;

use super::{OutputFormatter, Report};

/// Terminal output as an aligned table
pub struct TerminalOutput {
    show_summary: bool,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self { show_summary: true }
    }

    /// Print only the table, without the trailing row count
    pub fn without_summary() -> Self {
        Self {
            show_summary: false,
        }
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TerminalOutput {
    fn render(&self, report: &Report<'_>, writer: &mut dyn Write) -> Result<()> {
        let (headers, rows) = report.grid();

        if let Report::Table(table) = report {
            if !table.columns.is_empty() {
                let types: Vec<String> = table
                    .columns
                    .iter()
                    .map(|c| format!("{}: {}", c.name, c.column_type))
                    .collect();
                writeln!(writer, "Columns: {}", types.join(", "))?;
            }
        }

        if headers.is_empty() || rows.is_empty() {
            writeln!(writer, "No rows.")?;
            return Ok(());
        }

        let mut data = Vec::with_capacity(rows.len() + 1);
        data.push(headers);
        data.extend(rows);
        write!(writer, "{}", build_table(&data))?;

        if self.show_summary {
            writeln!(writer, "{} rows", data.len() - 1)?;
        }
        Ok(())
    }
}

fn border(widths: &[usize], left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in widths.iter().enumerate() {
        line.push_str(&"─".repeat(*width + 2));
        if i < widths.len() - 1 {
            line.push(mid);
        }
    }
    line.push(right);
    line.push('\n');
    line
}

fn cells_line(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("│");
    for (i, width) in widths.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        line.push_str(&format!(" {:width$} │", cell, width = width));
    }
    line.push('\n');
    line
}

/// Build a formatted table; the first row is the header
fn build_table(data: &[Vec<String>]) -> String {
    let col_count = data.iter().map(Vec::len).max().unwrap_or(0);
    if col_count == 0 {
        return String::new();
    }

    let mut widths = vec![0; col_count];
    for row in data {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut output = border(&widths, '┌', '┬', '┐');
    output.push_str(&cells_line(&data[0], &widths));
    output.push_str(&border(&widths, '├', '┼', '┤'));
    for row in &data[1..] {
        output.push_str(&cells_line(row, &widths));
    }
    output.push_str(&border(&widths, '└', '┴', '┘'));
    output
}
