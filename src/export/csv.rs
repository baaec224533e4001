use std::io::Write;

use csv::WriterBuilder;

use super::{RowWriter, SHEET_COLUMNS};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::ExportRow;

pub struct CsvRowWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> CsvRowWriter<W> {
    pub fn new(out: W) -> Self {
        // Header is written by hand so an empty ledger still gets one.
        let inner = WriterBuilder::new().has_headers(false).from_writer(out);
        Self { inner }
    }

    pub fn into_inner(self) -> AnalyzerResult<W> {
        self.inner
            .into_inner()
            .map_err(|e| AnalyzerError::ExportFailed(e.to_string()))
    }
}

impl<W: Write> RowWriter for CsvRowWriter<W> {
    fn write_rows(&mut self, rows: &[ExportRow]) -> AnalyzerResult<()> {
        self.inner.write_record(SHEET_COLUMNS.iter().map(|c| c.header))?;
        for row in rows {
            self.inner.serialize(row)?;
        }
        self.inner
            .flush()
            .map_err(|e| AnalyzerError::ExportFailed(e.to_string()))
    }
}
