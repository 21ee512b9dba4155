//! Date helper functions

use chrono::NaiveDate;

/// The only accepted metadata date layout
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Default display format for templates ("January 2, 2006")
pub const DEFAULT_DISPLAY_FORMAT: &str = "%B %-d, %Y";

/// Parse a metadata date in zero-padded `YYYY-MM-DD` form
///
/// Anything else, including surrounding whitespace or a time part, is `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Format a date with a chrono strftime pattern
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-01-17"),
            NaiveDate::from_ymd_opt(2025, 1, 17)
        );
    }

    #[test]
    fn test_parse_date_rejects_other_layouts() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-1-17"), None);
        assert_eq!(parse_date("2025/01/17"), None);
        assert_eq!(parse_date("2025-01-17 10:30:00"), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("yesterday"), None);
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        assert_eq!(format_date(&date, DEFAULT_DISPLAY_FORMAT), "January 7, 2025");
        assert_eq!(format_date(&date, "%b %-d, %Y"), "Jan 7, 2025");
    }
}
