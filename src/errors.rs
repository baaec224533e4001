use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::Kind;

/// Errors surfaced while building or querying a transaction analyzer
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The statement or export file could not be opened, read or created
    #[error("Failed to access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reader source failed part way through the statement
    #[error("Failed to read statement content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was asked to build without content or a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    /// Statistics were requested over a ledger with no months
    #[error("No {0} recorded, ledger is empty")]
    EmptyLedger(Kind),

    /// A row writer could not serialize the export rows
    #[error("Export failed: {0}")]
    ExportFailed(String),

    /// The export path has an extension no writer handles
    #[error("Unsupported export format: {0}")]
    UnsupportedExportFormat(String),
}

impl From<csv::Error> for AnalyzerError {
    fn from(err: csv::Error) -> Self {
        AnalyzerError::ExportFailed(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        AnalyzerError::ExportFailed(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for AnalyzerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        AnalyzerError::ExportFailed(err.to_string())
    }
}

/// Why a single statement line was left out of the ledgers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineRejection {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("day {day} / month {month} is not a calendar date")]
    DateOutOfRange { day: i64, month: i64 },

    #[error("invalid amount {0:?}")]
    InvalidAmount(String),

    #[error("negative amount {0}")]
    NegativeAmount(Decimal),

    #[error("amount {0} would overflow the ledger total")]
    AmountOverflow(Decimal),

    #[error("neither debit nor credit amount is populated")]
    MissingAmount,

    #[error("unreadable line: {0}")]
    Unreadable(String),
}

/// Convenience alias for results carrying [`AnalyzerError`]
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
