use chrono::{NaiveDateTime, NaiveTime, Timelike};

/// A single table cell: a typed value or the explicit missing marker.
///
/// Missing is a first-class sentinel, distinct from empty text. Every
/// cleaning stage that cannot produce a valid value writes `Missing`
/// instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Missing,
    Text(String),
    Number(f64),
    DateTime(NaiveDateTime),
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Cell::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// Render the cell for CSV output. Missing renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Number(value) => format_numeric(*value),
            Cell::DateTime(value) => format_datetime(*value),
        }
    }

    /// Append a stable comparison key for row deduplication.
    ///
    /// Missing markers get their own sentinel so two missing cells compare
    /// equal and never collide with real text.
    pub fn write_key(&self, out: &mut String) {
        match self {
            Cell::Missing => out.push('\u{1a}'),
            Cell::Text(value) => out.push_str(value),
            Cell::Number(value) => out.push_str(&format_numeric(*value)),
            Cell::DateTime(value) => out.push_str(&format_datetime(*value)),
        }
    }
}

/// Format a float without a trailing `.0` for integral values.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// ISO 8601 rendering; the time part is omitted at midnight so date-only
/// inputs round-trip through the pipeline unchanged.
fn format_datetime(value: NaiveDateTime) -> String {
    if value.time() == NaiveTime::MIN && value.nanosecond() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn integral_numbers_render_without_decimal_point() {
        assert_eq!(format_numeric(30.0), "30");
        assert_eq!(format_numeric(-4.0), "-4");
        assert_eq!(format_numeric(10.5), "10.5");
    }

    #[test]
    fn midnight_datetimes_render_as_dates() {
        let date = NaiveDate::from_ymd_opt(2020, 2, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Cell::DateTime);
        assert_eq!(date.map(|c| c.render()), Some("2020-02-01".to_string()));

        let stamp = NaiveDate::from_ymd_opt(2020, 2, 1)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .map(Cell::DateTime);
        assert_eq!(
            stamp.map(|c| c.render()),
            Some("2020-02-01T10:30:00".to_string())
        );
    }

    #[test]
    fn missing_renders_empty_but_keys_distinctly() {
        assert_eq!(Cell::Missing.render(), "");
        let mut missing_key = String::new();
        Cell::Missing.write_key(&mut missing_key);
        let mut empty_key = String::new();
        Cell::Text(String::new()).write_key(&mut empty_key);
        assert_ne!(missing_key, empty_key);
    }
}
