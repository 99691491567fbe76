/// Utilities for date and time formatting
///
/// All dates arrive from the backend as ISO strings; these helpers only
/// re-arrange them for display.
use chrono::{Local, NaiveDate};

/// Format ISO datetime string to `YYYY.MM.DD HH:MM` format
/// Example: "2026-03-15T14:02:26.123Z" -> "2026.03.15 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let time = time_part.get(..5).unwrap_or(time_part);
            return format!("{} {}", date, time);
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string to `YYYY.MM.DD` format
/// Example: "2026-03-15" or "2026-03-15T14:02:26Z" -> "2026.03.15"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", year, month, day);
        }
    }
    date_str.to_string()
}

/// "2026-03-15" + "09:00" -> "2026.03.15 09:00"
pub fn format_schedule(date: &str, start_time: &str) -> String {
    format!("{} {}", format_date(date), start_time)
}

/// Local calendar date of the browser
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2026-03-15T14:02:26.123Z"),
            "2026.03.15 14:02"
        );
        assert_eq!(format_datetime("2026-12-31T23:59"), "2026.12.31 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-03-15"), "2026.03.15");
        assert_eq!(format_date("2026-03-15T14:02:26.123Z"), "2026.03.15");
        assert_eq!(format_schedule("2026-03-15", "09:00"), "2026.03.15 09:00");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
