use crate::errors::LineRejection;
use serde::{Deserialize, Serialize};

/// How calendar ranges of the posting day and month are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateValidation {
    /// Any integers are stored as-is (day 32, month 13, day -1, ...).
    #[default]
    #[serde(rename = "lenient")]
    Lenient,
    /// Month must be 1–12 and the day must exist in that month.
    /// The year is not known, so 29 February is always accepted.
    #[serde(rename = "strict")]
    Strict,
}

const DAYS_IN_MONTH: [i64; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Posting date column of a statement line, e.g. `01/03/2024`.
///
/// Only the first two `/`-separated components are read, as day then month.
/// Anything after them (the year, a time) is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvDate(String);

/// Day and month pulled out of a [`CsvDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMonth {
    pub day: i64,
    pub month: i64,
}

impl CsvDate {
    pub fn parse(&self, validation: DateValidation) -> Result<DayMonth, LineRejection> {
        let invalid = || LineRejection::InvalidDate(self.0.clone());

        let mut parts = self.0.trim().split('/');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;

        let day: i64 = day.trim().parse().map_err(|_| invalid())?;
        let month: i64 = month.trim().parse().map_err(|_| invalid())?;

        if validation == DateValidation::Strict && !is_calendar_day(day, month) {
            return Err(LineRejection::DateOutOfRange { day, month });
        }

        Ok(DayMonth { day, month })
    }
}

fn is_calendar_day(day: i64, month: i64) -> bool {
    (1..=12).contains(&month) && (1..=DAYS_IN_MONTH[month as usize - 1]).contains(&day)
}

impl From<String> for CsvDate {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CsvDate {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
