/// Utilities for date and time formatting
///
/// The API sends plain dates (`2024-03-15`), MySQL-style timestamps
/// (`2024-03-15 14:02:26`) and RFC 3339 (`2024-03-15T14:02:26Z`).
use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_OUT: &str = "%b %-d, %Y";
const DATETIME_OUT: &str = "%b %-d, %Y %-I:%M %p";

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(value).map(|dt| dt.date()))
}

/// Format an ISO date or timestamp as `Mar 15, 2024`.
/// Unparseable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format(DATE_OUT).to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Format a timestamp as `Mar 15, 2024 2:02 PM`; a bare date keeps the date form.
pub fn format_datetime(value: &str) -> String {
    if let Some(dt) = parse_datetime(value) {
        return dt.format(DATETIME_OUT).to_string();
    }
    format_date(value)
}

/// `format_date` for optional columns, with a placeholder for missing values.
pub fn format_date_or(value: Option<&str>, placeholder: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => format_date(v),
        None => placeholder.to_string(),
    }
}

/// Whole nights between two `YYYY-MM-DD` dates, if both parse.
pub fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let start = parse_date(check_in)?;
    let end = parse_date(check_out)?;
    Some((end - start).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05 14:02:26"), "Mar 5, 2024");
        assert_eq!(format_date("2024-12-31T23:59:59Z"), "Dec 31, 2024");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15 14:02:26"), "Mar 15, 2024 2:02 PM");
        assert_eq!(format_datetime("2024-03-15T09:30:00.123"), "Mar 15, 2024 9:30 AM");
        assert_eq!(format_datetime("2024-03-15"), "Mar 15, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn test_format_date_or() {
        assert_eq!(format_date_or(None, "Never"), "Never");
        assert_eq!(format_date_or(Some(" "), "Never"), "Never");
        assert_eq!(format_date_or(Some("2025-03-19"), "Never"), "Mar 19, 2025");
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between("2025-03-19", "2025-03-22"), Some(3));
        assert_eq!(nights_between("2025-03-19", "bad"), None);
    }
}
