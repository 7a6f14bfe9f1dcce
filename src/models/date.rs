//! Lenient calendar date parsing
//!
//! Ledger files and imports come from spreadsheets and bank exports, so dates
//! are accepted in several common layouts. Anything unrecognized becomes
//! `None` rather than an error.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Canonical on-disk date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_LAYOUTS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

const DATETIME_LAYOUTS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a date, returning `None` for empty or unrecognized input
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(raw, layout).ok())
        .or_else(|| {
            DATETIME_LAYOUTS
                .iter()
                .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Format an optional date for storage; missing dates become an empty field
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_layouts() {
        assert_eq!(parse_date("2025-01-15"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("2025/01/15"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("01/15/2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("15-01-2025"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("2025-01-15 08:30:00"), Some(ymd(2025, 1, 15)));
        assert_eq!(parse_date("2025-01-15T08:30:00+05:30"), Some(ymd(2025, 1, 15)));
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("   "), None);
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2025-13-40"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(ymd(2025, 3, 7))), "2025-03-07");
        assert_eq!(format_date(None), "");
    }
}
