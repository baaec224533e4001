use std::fs::File;
use std::path::PathBuf;

use crate::{
    analyzer::TransactionAnalyzer,
    errors::{AnalyzerError, AnalyzerResult},
    parsers::prelude::*,
};

#[derive(Default)]
pub struct AnalyzerBuilder {
    content: Option<String>,
    filepath: Option<PathBuf>,
    validation: DateValidation,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    pub fn filename(mut self, filename: impl Into<PathBuf>) -> Self {
        self.filepath = Some(filename.into());
        self
    }

    pub fn date_validation(mut self, validation: DateValidation) -> Self {
        self.validation = validation;
        self
    }

    /// Reads the whole statement and folds it into ledgers.
    ///
    /// Content takes precedence over a file path when both are given.
    pub fn build(self) -> AnalyzerResult<TransactionAnalyzer> {
        let parser = StatementParser::new(self.validation);

        let parsed = match (self.content, self.filepath) {
            (Some(content), _) => parser.parse_str(&content)?,
            (None, Some(path)) => {
                let file = File::open(&path).map_err(|source| AnalyzerError::FileAccess {
                    path: path.clone(),
                    source,
                })?;
                parser.parse(file).map_err(|err| match err {
                    AnalyzerError::ReadContentFailed(source) => {
                        AnalyzerError::FileAccess { path, source }
                    }
                    other => other,
                })?
            }
            (None, None) => return Err(AnalyzerError::MissingContentAndFilepath),
        };

        Ok(TransactionAnalyzer::from_parsed(parsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Kind;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    const SAMPLE_CSV: &str = "Date,Details,Debit Amount,Credit Amount,Balance
01/03/2024,Coffee,3.50,,120.00
15/03/2024,Salary,,2000.00,2116.50
";

    #[test]
    fn test_builder_new() {
        let builder = AnalyzerBuilder::new();
        assert!(builder.content.is_none());
        assert!(builder.filepath.is_none());
        assert_eq!(builder.validation, DateValidation::Lenient);
    }

    #[test]
    fn test_builder_chaining() {
        let builder = AnalyzerBuilder::new()
            .content("content")
            .filename("statement.csv")
            .date_validation(DateValidation::Strict);

        assert_eq!(builder.content.as_deref(), Some("content"));
        assert_eq!(builder.filepath, Some(PathBuf::from("statement.csv")));
        assert_eq!(builder.validation, DateValidation::Strict);
    }

    #[test]
    fn test_builder_missing_content() {
        let result = AnalyzerBuilder::new().build();
        assert!(matches!(result, Err(AnalyzerError::MissingContentAndFilepath)));
    }

    #[test]
    fn test_build_from_content() {
        let analyzer = AnalyzerBuilder::new().content(SAMPLE_CSV).build().unwrap();

        assert_eq!(analyzer.debits().get(3, 1, "Coffee"), Some(Decimal::from_str("3.50").unwrap()));
        assert_eq!(
            analyzer.ledger(Kind::Credit).get(3, 15, "Salary"),
            Some(Decimal::from_str("2000.00").unwrap())
        );
    }

    #[test]
    fn test_build_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CSV.as_bytes()).unwrap();

        let analyzer = AnalyzerBuilder::new().filename(file.path()).build().unwrap();
        assert_eq!(analyzer.debits().len(), 1);
        assert_eq!(analyzer.credits().len(), 1);
    }

    #[test]
    fn test_content_wins_over_filename() {
        let analyzer = AnalyzerBuilder::new()
            .content(SAMPLE_CSV)
            .filename("/nonexistent/statement.csv")
            .build()
            .unwrap();

        assert_eq!(analyzer.debits().len(), 1);
    }

    #[test]
    fn test_missing_file_is_file_access_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.csv");

        let result = AnalyzerBuilder::new().filename(&path).build();

        match result {
            Err(AnalyzerError::FileAccess { path: reported, source }) => {
                assert_eq!(reported, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected FileAccess, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_strict_validation_is_forwarded() {
        let content = "Date,Details,Debit,Credit,Balance\n31/02/2024,Typo,1.00,,10.00\n";

        let analyzer = AnalyzerBuilder::new()
            .content(content)
            .date_validation(DateValidation::Strict)
            .build()
            .unwrap();

        assert!(analyzer.debits().is_empty());
        assert_eq!(analyzer.skipped().len(), 1);
    }
}
