//! Writers that consume the flat rows produced by
//! [`TransactionAnalyzer::export_rows`](crate::TransactionAnalyzer::export_rows).

mod csv;
mod json;
mod table;
mod xlsx;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::ExportRow;

pub use self::csv::CsvRowWriter;
pub use self::json::JsonRowWriter;
pub use self::table::TableRowWriter;
pub use self::xlsx::XlsxRowWriter;

/// One column of the exported sheet. Spreadsheet writers render the
/// header in bold and size the column to `width` character units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetColumn {
    pub header: &'static str,
    pub width: usize,
}

pub const SHEET_COLUMNS: [SheetColumn; 4] = [
    SheetColumn { header: "Month", width: 15 },
    SheetColumn { header: "Day", width: 10 },
    SheetColumn { header: "Details", width: 30 },
    SheetColumn { header: "Amount", width: 12 },
];

pub trait RowWriter {
    /// Writes the header row followed by one row per entry.
    fn write_rows(&mut self, rows: &[ExportRow]) -> AnalyzerResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    #[serde(rename = "csv")]
    Csv,
    #[serde(rename = "json")]
    Json,
    #[serde(rename = "table")]
    Table,
    #[serde(rename = "xlsx")]
    Xlsx,
}

impl ExportFormat {
    /// Picks a format from the file extension (`.csv`, `.json`, `.txt`, `.xlsx`).
    pub fn detect(path: &Path) -> AnalyzerResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "txt" => Ok(ExportFormat::Table),
            "xlsx" => Ok(ExportFormat::Xlsx),
            _ => Err(AnalyzerError::UnsupportedExportFormat(path.display().to_string())),
        }
    }

    /// Creates `path` and writes `rows` into it in this format.
    pub fn write_to_path(&self, path: &Path, rows: &[ExportRow]) -> AnalyzerResult<()> {
        let file = File::create(path).map_err(|source| AnalyzerError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let out = BufWriter::new(file);

        match self {
            ExportFormat::Csv => CsvRowWriter::new(out).write_rows(rows),
            ExportFormat::Json => JsonRowWriter::new(out).write_rows(rows),
            ExportFormat::Table => TableRowWriter::new(out).write_rows(rows),
            ExportFormat::Xlsx => XlsxRowWriter::new(out).write_rows(rows),
        }
    }
}
