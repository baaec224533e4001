use chrono::Month;

/// Returned by [`month_name`] for numbers outside 1–12.
pub const INVALID_MONTH: &str = "Invalid month number";

/// Full English calendar name for a month number, or [`INVALID_MONTH`].
pub fn month_name(month: i64) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or(INVALID_MONTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, "January")]
    #[case(3, "March")]
    #[case(12, "December")]
    #[case(0, INVALID_MONTH)]
    #[case(13, INVALID_MONTH)]
    #[case(300, INVALID_MONTH)]
    fn test_month_name(#[case] month: i64, #[case] expected: &str) {
        assert_eq!(month_name(month), expected);
    }
}
