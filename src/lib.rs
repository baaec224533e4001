//! Aggregate bank account CSV exports into debit and credit ledgers grouped
//! by month, day and description.
//!
//! ```rust,ignore
//! use bank_ledger_rs::{Kind, TransactionAnalyzer};
//!
//! let analyzer = TransactionAnalyzer::from_path("statement.csv")?;
//! println!("{}", analyzer.format_monthly_report(Kind::Debit));
//! let average = analyzer.average_monthly(Kind::Debit)?;
//! analyzer.export_to_path(Kind::Debit, "debits.csv")?;
//! ```

mod analyzer;
mod builder;
mod months;
mod types;

pub mod errors;
pub mod export;
pub mod ledger;
pub mod parsers;

pub use analyzer::TransactionAnalyzer;
pub use builder::AnalyzerBuilder;
pub use errors::{AnalyzerError, AnalyzerResult, LineRejection};
pub use ledger::Ledger;
pub use months::{INVALID_MONTH, month_name};
pub use parsers::prelude::*;
pub use types::{ExportRow, Kind, Record};
