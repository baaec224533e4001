use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;

use crate::{
    builder::AnalyzerBuilder,
    errors::{AnalyzerError, AnalyzerResult},
    export::{ExportFormat, RowWriter},
    ledger::Ledger,
    months::month_name,
    parsers::prelude::*,
    types::{ExportRow, Kind, Record},
};

/// Debit and credit ledgers built from a single bank statement.
///
/// Both ledgers are filled once, while the analyzer is constructed, and are
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TransactionAnalyzer {
    debits: Ledger,
    credits: Ledger,
    skipped: Vec<SkippedLine>,
}

impl TransactionAnalyzer {
    pub fn from_path(path: impl AsRef<Path>) -> AnalyzerResult<Self> {
        AnalyzerBuilder::new().filename(path.as_ref()).build()
    }

    pub fn from_content(content: &str) -> AnalyzerResult<Self> {
        AnalyzerBuilder::new().content(content).build()
    }

    pub fn from_reader<R: Read>(reader: R) -> AnalyzerResult<Self> {
        let parsed = StatementParser::default().parse(reader)?;
        Ok(Self::from_parsed(parsed))
    }

    /// Folds already-parsed records, in order.
    ///
    /// Records the ledgers refuse end up in [`skipped`](Self::skipped).
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut analyzer = Self::default();
        for record in records {
            analyzer.fold(record);
        }
        analyzer
    }

    pub(crate) fn from_parsed(parsed: Parsed<Record>) -> Self {
        let read = parsed.records.len();
        let mut analyzer = Self {
            skipped: parsed.skipped,
            ..Self::default()
        };
        for record in parsed.records {
            analyzer.fold(record);
        }
        analyzer.skipped.sort_by_key(|s| s.line);

        tracing::info!(
            read,
            skipped = analyzer.skipped.len(),
            debit_entries = analyzer.debits.len(),
            credit_entries = analyzer.credits.len(),
            "statement aggregated"
        );

        analyzer
    }

    fn fold(&mut self, record: Record) {
        let ledger = match record.kind {
            Kind::Debit => &mut self.debits,
            Kind::Credit => &mut self.credits,
        };
        if let Err(reason) = ledger.fold(record.month, record.day, &record.description, record.amount) {
            tracing::debug!(line = record.line, %reason, "skipping statement line");
            self.skipped.push(SkippedLine { line: record.line, reason });
        }
    }

    pub fn debits(&self) -> &Ledger {
        &self.debits
    }

    pub fn credits(&self) -> &Ledger {
        &self.credits
    }

    pub fn ledger(&self, kind: Kind) -> &Ledger {
        match kind {
            Kind::Debit => &self.debits,
            Kind::Credit => &self.credits,
        }
    }

    /// Lines dropped while reading the statement, with the reason for each.
    pub fn skipped(&self) -> &[SkippedLine] {
        &self.skipped
    }

    pub fn monthly_totals(&self, kind: Kind) -> Vec<(i64, Decimal)> {
        self.ledger(kind).monthly_totals()
    }

    /// Mean of the monthly totals, rounded to 2 decimal places.
    pub fn average_monthly(&self, kind: Kind) -> AnalyzerResult<Decimal> {
        let totals = self.monthly_totals(kind);
        if totals.is_empty() {
            return Err(AnalyzerError::EmptyLedger(kind));
        }

        let sum: Decimal = totals.iter().map(|(_, total)| *total).sum();
        let average = sum / Decimal::from(totals.len());
        Ok(average.round_dp(2))
    }

    /// Title, underline, then one `Month - total` line per month.
    pub fn format_monthly_report(&self, kind: Kind) -> String {
        let title = format!("Monthly {}:", kind.title());

        let mut report = format!("{}\n{}\n", title, "-".repeat(title.len()));
        for (month, total) in self.monthly_totals(kind) {
            report.push_str(&format!("{} - {:.2}\n", month_name(month), total.round_dp(2)));
        }
        report
    }

    pub fn export_rows(&self, kind: Kind) -> Vec<ExportRow> {
        self.ledger(kind).rows()
    }

    pub fn export<W: RowWriter>(&self, kind: Kind, writer: &mut W) -> AnalyzerResult<()> {
        writer.write_rows(&self.export_rows(kind))
    }

    /// Writes the rows of `kind` to `path`, choosing the format from its
    /// extension.
    pub fn export_to_path(&self, kind: Kind, path: impl AsRef<Path>) -> AnalyzerResult<()> {
        let path = path.as_ref();
        let format = ExportFormat::detect(path)?;

        tracing::debug!(%kind, path = %path.display(), ?format, "exporting ledger");
        format.write_to_path(path, &self.export_rows(kind))
    }
}
