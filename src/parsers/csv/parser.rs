use std::io::{BufRead, BufReader, Read};

use csv::StringRecord;

use super::dto::StatementLineRaw;
use super::types::DateValidation;
use crate::errors::{AnalyzerResult, LineRejection};
use crate::parsers::traits::{Parsed, Parser, SkippedLine};
use crate::types::Record;

const HEADER_LINE: u64 = 1;

/// Parser for `Date,Details,DebitAmount,CreditAmount,Balance` exports.
///
/// Physical line 1 is the header and is always discarded, even when blank.
/// Lines are split on every comma; quotes get no special treatment, so a
/// comma inside the details column shifts the fields and the line is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatementParser {
    validation: DateValidation,
}

impl StatementParser {
    pub fn new(validation: DateValidation) -> Self {
        Self { validation }
    }

    pub fn parse_str(&self, content: &str) -> AnalyzerResult<Parsed<Record>> {
        self.parse(content.as_bytes())
    }

    fn reject(parsed: &mut Parsed<Record>, line: u64, reason: LineRejection) {
        tracing::debug!(line, %reason, "skipping statement line");
        parsed.skipped.push(SkippedLine { line, reason });
    }
}

impl Parser for StatementParser {
    type Output = Record;

    fn parse<R: Read>(&self, reader: R) -> AnalyzerResult<Parsed<Self::Output>> {
        let mut parsed = Parsed::default();

        for (line, chunk) in (1u64..).zip(BufReader::new(reader).split(b'\n')) {
            let bytes = chunk?;
            if line == HEADER_LINE {
                continue;
            }

            let text = match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => {
                    Self::reject(&mut parsed, line, LineRejection::Unreadable(err.to_string()));
                    continue;
                }
            };
            let text = text.strip_suffix('\r').unwrap_or(&text);
            if text.trim().is_empty() {
                continue;
            }

            let fields: StringRecord = text.split(',').collect();
            let converted = StatementLineRaw::try_from(&fields)
                .and_then(|raw| raw.into_record(line, self.validation));

            match converted {
                Ok((record, shadowed)) => {
                    if shadowed {
                        tracing::warn!(
                            line,
                            details = %record.description,
                            "debit and credit both populated, credit ignored"
                        );
                    }
                    parsed.records.push(record);
                }
                Err(reason) => Self::reject(&mut parsed, line, reason),
            }
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AnalyzerError;
    use crate::types::Kind;
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::io;
    use std::str::FromStr;

    // Hands out `head`, then fails like a source that went away mid-read.
    struct FailingReader<'a> {
        head: &'a [u8],
    }

    impl Read for FailingReader<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.head.is_empty() {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "source went away"));
            }
            let n = self.head.len().min(buf.len());
            buf[..n].copy_from_slice(&self.head[..n]);
            self.head = &self.head[n..];
            Ok(n)
        }
    }

    const SAMPLE_CSV: &str = "Date,Details,Debit Amount,Credit Amount,Balance
01/03/2024,Coffee,3.50,,120.00
01/03/2024,Coffee,2.00,,118.00
15/03/2024,Salary,,2000.00,2118.00
16/03/2024,Broken,line
";

    #[test]
    fn test_parse_valid_csv() {
        let parsed = StatementParser::default().parse_str(SAMPLE_CSV).unwrap();

        assert_eq!(parsed.records.len(), 3);
        assert_eq!(parsed.records[0].kind, Kind::Debit);
        assert_eq!(parsed.records[0].amount.to_string(), "3.50");
        assert_eq!(parsed.records[2].kind, Kind::Credit);
        assert_eq!(parsed.records[2].amount, Decimal::from_str("2000.00").unwrap());
    }

    #[test]
    fn test_skipped_lines_carry_line_numbers() {
        let parsed = StatementParser::default().parse_str(SAMPLE_CSV).unwrap();

        assert_eq!(
            parsed.skipped,
            vec![SkippedLine { line: 5, reason: LineRejection::FieldCount(3) }]
        );
    }

    #[rstest]
    #[case("01/03/2024,Coffee,3.50,,120.00\n02/03/2024,Tea,1.50,,118.50\n", "Tea", 2)]
    #[case("\n02/03/2024,Tea,1.50,,118.50\n", "Tea", 2)]
    #[case("\r\n\n03/03/2024,Tea,1.50,,118.50\n", "Tea", 3)]
    fn test_only_first_physical_line_is_discarded(
        #[case] content: &str,
        #[case] description: &str,
        #[case] line: u64,
    ) {
        let parsed = StatementParser::default().parse_str(content).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].description, description);
        assert_eq!(parsed.records[0].line, line);
    }

    #[rstest]
    #[case("")]
    #[case("Date,Details,Debit Amount,Credit Amount,Balance")]
    #[case("Date,Details,Debit Amount,Credit Amount,Balance\n\n\n")]
    fn test_no_data_lines(#[case] content: &str) {
        let parsed = StatementParser::default().parse_str(content).unwrap();
        assert!(parsed.records.is_empty());
        assert!(parsed.skipped.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "Date,Details,Debit,Credit,Balance\r\n01/03/2024,Coffee,3.50,,120.00\r\n";
        let parsed = StatementParser::default().parse_str(content).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].amount, Decimal::from_str("3.50").unwrap());
    }

    #[test]
    fn test_quotes_are_not_special() {
        let content = "Date,Details,Debit,Credit,Balance\n01/03/2024,\"Smith, J\",3.50,,120.00\n";
        let parsed = StatementParser::default().parse_str(content).unwrap();

        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped[0].reason, LineRejection::FieldCount(6));
    }

    #[test]
    fn test_strict_validation_drops_impossible_dates() {
        let content = "Date,Details,Debit,Credit,Balance\n32/01/2024,Typo,3.50,,120.00\n";

        let lenient = StatementParser::new(DateValidation::Lenient).parse_str(content).unwrap();
        assert_eq!(lenient.records.len(), 1);
        assert_eq!(lenient.records[0].day, 32);

        let strict = StatementParser::new(DateValidation::Strict).parse_str(content).unwrap();
        assert!(strict.records.is_empty());
        assert_eq!(
            strict.skipped[0].reason,
            LineRejection::DateOutOfRange { day: 32, month: 1 }
        );
    }

    #[test]
    fn test_non_utf8_line_is_skipped() {
        let content: &[u8] = b"Date,Details,Debit,Credit,Balance\n01/03/2024,Caf\xe9,3.50,,0\n02/03/2024,Tea,1.50,,0\n";
        let parsed = StatementParser::default().parse(content).unwrap();

        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].line, 3);
        assert_eq!(parsed.skipped.len(), 1);
        assert_eq!(parsed.skipped[0].line, 2);
        assert!(matches!(parsed.skipped[0].reason, LineRejection::Unreadable(_)));
    }

    #[test]
    fn test_reader_failure_is_reported() {
        let reader = FailingReader {
            head: b"Date,Details,Debit,Credit,Balance\n01/03/2024,Coffee,3.50,,120.00\n",
        };
        let result = StatementParser::default().parse(reader);

        assert!(matches!(result, Err(AnalyzerError::ReadContentFailed(_))));
    }
}
