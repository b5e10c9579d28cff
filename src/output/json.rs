//! JSON output format

use std::io::Write;

use anyhow::Result;

use super::{OutputFormatter, Report};

/// JSON output formatter
pub struct JsonOutput {
    pretty: bool,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact() -> Self {
        Self { pretty: false }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn render(&self, report: &Report<'_>, writer: &mut dyn Write) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, report)?;
        } else {
            serde_json::to_writer(&mut *writer, report)?;
        }
        writeln!(writer)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Column, ColumnType, LoadedTable, Row};

    #[test]
    fn test_table_json() {
        let mut table = LoadedTable::new(vec![
            Column::new("id", 0, ColumnType::String),
            Column::new("z", 1, ColumnType::Float),
        ]);
        table
            .rows
            .push(Row::new(vec![CellValue::from("sn1"), CellValue::Float(0.5)], 3));
        table.lookup.insert("sn1".to_string(), 0);

        let mut buf = Vec::new();
        JsonOutput::compact()
            .render(&Report::Table(&table), &mut buf)
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value["columns"][1]["column_type"], "Float");
        assert_eq!(value["rows"][0]["cells"][0], "sn1");
        assert_eq!(value["rows"][0]["cells"][1], 0.5);
        assert_eq!(value["rows"][0]["source_line"], 3);
        assert_eq!(value["lookup"]["sn1"], 0);
    }
}
