use std::io::Write;

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use super::{RowWriter, SHEET_COLUMNS};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::ExportRow;

/// Single-sheet `.xlsx` workbook with a bold header row and the sheet
/// column widths. Month, day and amount are stored as numbers.
///
/// The workbook is assembled in memory and written out in one go.
pub struct XlsxRowWriter<W: Write> {
    out: W,
}

impl<W: Write> XlsxRowWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn build_workbook(rows: &[ExportRow]) -> AnalyzerResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    {
        let sheet = workbook.add_worksheet();
        for (col, column) in (0u16..).zip(SHEET_COLUMNS.iter()) {
            sheet.write_string_with_format(0, col, column.header, &header)?;
            sheet.set_column_width(col, column.width as f64)?;
        }

        for (row, entry) in (1u32..).zip(rows) {
            let amount = entry.amount.to_f64().ok_or_else(|| {
                AnalyzerError::ExportFailed(format!("amount {} has no float form", entry.amount))
            })?;

            sheet.write_number(row, 0, entry.month as f64)?;
            sheet.write_number(row, 1, entry.day as f64)?;
            sheet.write_string(row, 2, &entry.description)?;
            sheet.write_number(row, 3, amount)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

impl<W: Write> RowWriter for XlsxRowWriter<W> {
    fn write_rows(&mut self, rows: &[ExportRow]) -> AnalyzerResult<()> {
        let bytes = build_workbook(rows)?;
        tracing::trace!(rows = rows.len(), bytes = bytes.len(), "workbook assembled");

        let export_err = |e: std::io::Error| AnalyzerError::ExportFailed(e.to_string());
        self.out.write_all(&bytes).map_err(export_err)?;
        self.out.flush().map_err(export_err)
    }
}
