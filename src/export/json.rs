use std::io::Write;

use super::RowWriter;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::types::ExportRow;

/// Writes rows as a pretty-printed JSON array keyed by the sheet headers.
pub struct JsonRowWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonRowWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RowWriter for JsonRowWriter<W> {
    fn write_rows(&mut self, rows: &[ExportRow]) -> AnalyzerResult<()> {
        serde_json::to_writer_pretty(&mut self.out, rows)?;
        self.out
            .flush()
            .map_err(|e| AnalyzerError::ExportFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_writes_json_array() {
        let rows = vec![ExportRow {
            month: 1,
            day: 15,
            description: "Salary".to_string(),
            amount: Decimal::from_str("2000.00").unwrap(),
        }];

        let mut writer = JsonRowWriter::new(Vec::new());
        writer.write_rows(&rows).unwrap();

        let out = writer.into_inner();
        let parsed: Vec<ExportRow> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, rows);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Details\": \"Salary\""));
    }

    #[test]
    fn test_empty_rows() {
        let mut writer = JsonRowWriter::new(Vec::new());
        writer.write_rows(&[]).unwrap();
        assert_eq!(writer.into_inner(), b"[]");
    }
}
