//! Typed month → day → description accumulation.
//!
//! Every level keeps first-insertion order, so iteration follows the order
//! in which a statement first mentions a month, a day or a description
//! rather than calendar order.
//!
//! Amounts are never negative and the ledger keeps a checked running total,
//! so every day, month or ledger sum is bounded by that total and cannot
//! overflow.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LineRejection;
use crate::types::ExportRow;

/// Accumulated amount for one description on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLedger {
    pub day: i64,
    entries: Vec<LedgerEntry>,
}

impl DayLedger {
    fn new(day: i64) -> Self {
        Self { day, entries: Vec::new() }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn get(&self, description: &str) -> Option<Decimal> {
        self.entries
            .iter()
            .find(|e| e.description == description)
            .map(|e| e.amount)
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    fn fold(&mut self, description: &str, amount: Decimal) {
        match self.entries.iter_mut().find(|e| e.description == description) {
            Some(entry) => entry.amount += amount,
            None => self.entries.push(LedgerEntry {
                description: description.to_string(),
                amount,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthLedger {
    pub month: i64,
    days: Vec<DayLedger>,
}

impl MonthLedger {
    fn new(month: i64) -> Self {
        Self { month, days: Vec::new() }
    }

    pub fn days(&self) -> &[DayLedger] {
        &self.days
    }

    pub fn day(&self, day: i64) -> Option<&DayLedger> {
        self.days.iter().find(|d| d.day == day)
    }

    /// Sum of every description on every day of the month.
    pub fn total(&self) -> Decimal {
        self.days.iter().map(DayLedger::total).sum()
    }

    fn day_mut(&mut self, day: i64) -> &mut DayLedger {
        let idx = match self.days.iter().position(|d| d.day == day) {
            Some(idx) => idx,
            None => {
                self.days.push(DayLedger::new(day));
                self.days.len() - 1
            }
        };
        &mut self.days[idx]
    }
}

/// Accumulated amounts for a single [`Kind`](crate::Kind).
///
/// A `(month, day, description)` triple appears at most once; folding the
/// same triple again adds to the stored amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    months: Vec<MonthLedger>,
    #[serde(skip)]
    total: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> &[MonthLedger] {
        &self.months
    }

    pub fn month(&self, month: i64) -> Option<&MonthLedger> {
        self.months.iter().find(|m| m.month == month)
    }

    /// Amount stored for a leaf, if the triple has been seen.
    pub fn get(&self, month: i64, day: i64, description: &str) -> Option<Decimal> {
        self.month(month)?.day(day)?.get(description)
    }

    /// Number of leaf entries.
    pub fn len(&self) -> usize {
        self.months
            .iter()
            .flat_map(|m| m.days.iter())
            .map(|d| d.entries.len())
            .sum()
    }

    /// Sum of every leaf amount.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Month → total, in ledger order.
    pub fn monthly_totals(&self) -> Vec<(i64, Decimal)> {
        self.months.iter().map(|m| (m.month, m.total())).collect()
    }

    /// Flattens the ledger into one row per leaf, in ledger order.
    pub fn rows(&self) -> Vec<ExportRow> {
        self.months
            .iter()
            .flat_map(|m| {
                m.days.iter().flat_map(move |d| {
                    d.entries.iter().map(move |e| ExportRow {
                        month: m.month,
                        day: d.day,
                        description: e.description.clone(),
                        amount: e.amount,
                    })
                })
            })
            .collect()
    }

    /// Adds `amount` to the `(month, day, description)` leaf.
    ///
    /// Negative amounts, and amounts that would push the ledger total past
    /// `Decimal::MAX`, are refused and leave the ledger untouched.
    pub(crate) fn fold(
        &mut self,
        month: i64,
        day: i64,
        description: &str,
        amount: Decimal,
    ) -> Result<(), LineRejection> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(LineRejection::NegativeAmount(amount));
        }
        self.total = self
            .total
            .checked_add(amount)
            .ok_or(LineRejection::AmountOverflow(amount))?;

        let idx = match self.months.iter().position(|m| m.month == month) {
            Some(idx) => idx,
            None => {
                self.months.push(MonthLedger::new(month));
                self.months.len() - 1
            }
        };
        self.months[idx].day_mut(day).fold(description, amount);
        Ok(())
    }
}
