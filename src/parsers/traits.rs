use std::io::Read;

use crate::errors::{AnalyzerResult, LineRejection};

/// A statement line that was left out, with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: u64,
    pub reason: LineRejection,
}

/// Outcome of parsing a whole statement: accepted records plus diagnostics.
#[derive(Debug, Clone)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self { records: Vec::new(), skipped: Vec::new() }
    }
}

pub trait Parser {
    type Output;

    /// Malformed lines are recorded in [`Parsed::skipped`]; only failure of
    /// the reader itself is returned as an error.
    fn parse<R: Read>(&self, reader: R) -> AnalyzerResult<Parsed<Self::Output>>;
}
