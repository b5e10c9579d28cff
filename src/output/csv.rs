//! CSV output format

use std::io::Write;

use anyhow::Result;

use super::{OutputFormatter, Report};

/// CSV output formatter
pub struct CsvOutput {
    delimiter: u8,
}

impl CsvOutput {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }
}

impl Default for CsvOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for CsvOutput {
    fn render(&self, report: &Report<'_>, writer: &mut dyn Write) -> Result<()> {
        let (headers, rows) = report.grid();
        let mut csv_writer = ::csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(writer);

        if !headers.is_empty() {
            csv_writer.write_record(&headers)?;
        }
        for row in &rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}
