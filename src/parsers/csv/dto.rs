use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;

use super::types::{CsvDate, DateValidation};
use crate::errors::LineRejection;
use crate::types::{Kind, Record};

pub(super) const FIELD_COUNT: usize = 5;

/// The five columns of a statement line, before any conversion.
#[derive(Debug)]
pub struct StatementLineRaw {
    pub date: CsvDate,
    pub details: String,
    pub debit: String,
    pub credit: String,
    // Balance column, carried but never read.
    pub balance: String,
}

impl TryFrom<&StringRecord> for StatementLineRaw {
    type Error = LineRejection;

    fn try_from(fields: &StringRecord) -> Result<Self, Self::Error> {
        if fields.len() != FIELD_COUNT {
            return Err(LineRejection::FieldCount(fields.len()));
        }

        Ok(StatementLineRaw {
            date: CsvDate::from(&fields[0]),
            details: fields[1].to_string(),
            debit: fields[2].to_string(),
            credit: fields[3].to_string(),
            balance: fields[4].to_string(),
        })
    }
}

impl StatementLineRaw {
    /// Converts the raw columns into a [`Record`].
    ///
    /// A non-empty debit column wins over the credit column, even when it
    /// holds only whitespace. The returned flag is true when the credit
    /// column was populated too and dropped.
    pub fn into_record(
        self,
        line: u64,
        validation: DateValidation,
    ) -> Result<(Record, bool), LineRejection> {
        let date = self.date.parse(validation)?;

        let (kind, raw_amount, shadowed) = match (self.debit.is_empty(), self.credit.is_empty()) {
            (false, credit_empty) => (Kind::Debit, self.debit.as_str(), !credit_empty),
            (true, false) => (Kind::Credit, self.credit.as_str(), false),
            (true, true) => return Err(LineRejection::MissingAmount),
        };

        let amount = parse_amount(raw_amount)?;

        Ok((
            Record {
                line,
                day: date.day,
                month: date.month,
                description: self.details,
                amount,
                kind,
            },
            shadowed,
        ))
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, LineRejection> {
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| LineRejection::InvalidAmount(raw.to_string()))
}
