/// Utilities for date formatting
///
/// Provides consistent date formatting across the application

use chrono::NaiveDate;

/// Format a date as DD.MM.YYYY for tables
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format a date as YYYY-MM-DD for file names and exports
pub fn iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse the date part of an ISO string
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> 2024-03-15
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.split('T').next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Current date taken from the browser clock
pub fn today() -> NaiveDate {
    let iso = js_sys::Date::new_0()
        .to_iso_string()
        .as_string()
        .unwrap_or_default();
    parse_iso_date(&iso).unwrap_or_else(|| NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15.03.2024");
        assert_eq!(iso_date(&date), "2024-03-15");
    }

    #[test]
    fn test_parse_iso_date() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(parse_iso_date("2024-03-15"), Some(expected));
        assert_eq!(parse_iso_date("2024-03-15T14:02:26.123Z"), Some(expected));
        assert_eq!(parse_iso_date("invalid"), None);
    }
}
