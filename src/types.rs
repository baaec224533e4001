use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Debit or credit classification of a statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    #[serde(rename = "debit")]
    Debit,
    #[serde(rename = "credit")]
    Credit,
}

impl Kind {
    /// Capitalised plural used in report titles ("Debits", "Credits").
    pub fn title(&self) -> &'static str {
        match self {
            Kind::Debit => "Debits",
            Kind::Credit => "Credits",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Debit => f.write_str("debits"),
            Kind::Credit => f.write_str("credits"),
        }
    }
}

/// One accepted statement line. The year of the posting date is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 1-based line number in the statement.
    pub line: u64,
    pub day: i64,
    pub month: i64,
    pub description: String,
    pub amount: Decimal,
    pub kind: Kind,
}

/// Flat leaf entry handed to row writers.
///
/// Field names serialize to the sheet headers `Month, Day, Details, Amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "Month")]
    pub month: i64,
    #[serde(rename = "Day")]
    pub day: i64,
    #[serde(rename = "Details")]
    pub description: String,
    #[serde(rename = "Amount")]
    pub amount: Decimal,
}
