//! Day-first date parsing.
//!
//! Ambiguous numeric dates ("01/02/2020") are interpreted with the leading
//! group as the day, so day-first formats are tried before their month-first
//! counterparts. Month-first remains as a fallback for values that cannot be
//! a day-first date at all ("01/15/2024").

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M:%S",
    // Month-first fallback.
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
    // Month-first fallback.
    "%m/%d/%Y",
    "%Y%m%d",
];

/// Parse a date or datetime string, resolving day/month ambiguity day-first.
/// Returns `None` for anything unparseable; the caller writes the missing
/// marker.
pub fn parse_date_day_first(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(parsed.and_time(NaiveTime::MIN));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn ambiguous_dates_parse_day_first() {
        let parsed = parse_date_day_first("01/02/2020").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2020, 2, 1));
    }

    #[test]
    fn unambiguous_day_first_parses() {
        let parsed = parse_date_day_first("13/05/2021").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2021, 5, 13));
    }

    #[test]
    fn month_first_is_a_fallback() {
        // 15 cannot be a month, so the US reading applies.
        let parsed = parse_date_day_first("01/15/2024").unwrap();
        assert_eq!((parsed.year(), parsed.month(), parsed.day()), (2024, 1, 15));
    }

    #[test]
    fn iso_dates_and_datetimes_parse() {
        let date = parse_date_day_first("2024-01-15").unwrap();
        assert_eq!(date.time().hour(), 0);
        let stamp = parse_date_day_first("2024-01-15T10:30:45").unwrap();
        assert_eq!(stamp.time().hour(), 10);
    }

    #[test]
    fn named_months_parse() {
        let parsed = parse_date_day_first("15-Jan-2024").unwrap();
        assert_eq!((parsed.month(), parsed.day()), (1, 15));
    }

    #[test]
    fn junk_is_none() {
        assert!(parse_date_day_first("not a date").is_none());
        assert!(parse_date_day_first("").is_none());
        assert!(parse_date_day_first("32/13/2020").is_none());
    }
}
