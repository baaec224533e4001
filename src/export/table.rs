use std::io::Write;

use super::{RowWriter, SHEET_COLUMNS};
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::ExportRow;

/// Fixed-width text table laid out with the sheet column widths.
///
/// Cells longer than their column are cut so one space always separates
/// them from the next column.
pub struct TableRowWriter<W: Write> {
    out: W,
}

impl<W: Write> TableRowWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_line<'a>(&mut self, cells: impl IntoIterator<Item = &'a str>) -> std::io::Result<()> {
        let mut line = String::new();
        for (cell, column) in cells.into_iter().zip(SHEET_COLUMNS.iter()) {
            let fitted: String = cell.chars().take(column.width - 1).collect();
            line.push_str(&format!("{:<width$}", fitted, width = column.width));
        }
        writeln!(self.out, "{}", line.trim_end())
    }
}

impl<W: Write> RowWriter for TableRowWriter<W> {
    fn write_rows(&mut self, rows: &[ExportRow]) -> AnalyzerResult<()> {
        let export_err = |e: std::io::Error| AnalyzerError::ExportFailed(e.to_string());

        self.write_line(SHEET_COLUMNS.iter().map(|c| c.header))
            .map_err(export_err)?;

        let rule: Vec<String> = SHEET_COLUMNS.iter().map(|c| "-".repeat(c.width - 1)).collect();
        self.write_line(rule.iter().map(String::as_str))
            .map_err(export_err)?;

        for row in rows {
            let cells = [
                row.month.to_string(),
                row.day.to_string(),
                row.description.clone(),
                row.amount.to_string(),
            ];
            self.write_line(cells.iter().map(String::as_str))
                .map_err(export_err)?;
        }

        self.out.flush().map_err(export_err)
    }
}
