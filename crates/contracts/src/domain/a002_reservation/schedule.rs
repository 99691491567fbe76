//! Date and time-slot rules of the reservation form

use chrono::{Days, NaiveDate, NaiveTime};

/// First bookable hour
pub const FIRST_SLOT_HOUR: u32 = 6;
/// Last bookable hour, inclusive
pub const LAST_SLOT_HOUR: u32 = 20;

/// Reservations open from tomorrow on
pub fn earliest_reservation_date(today: NaiveDate) -> NaiveDate {
    today.checked_add_days(Days::new(1)).unwrap_or(today)
}

/// Hourly `HH:MM` slots between `first` and `last` (inclusive)
pub fn time_slots_between(first: u32, last: u32) -> Vec<String> {
    (first..=last.min(23)).map(|h| format!("{:02}:00", h)).collect()
}

/// `06:00` .. `20:00`, 15 slots
pub fn time_slots() -> Vec<String> {
    time_slots_between(FIRST_SLOT_HOUR, LAST_SLOT_HOUR)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn is_selectable_date(value: &str, today: NaiveDate) -> bool {
    parse_date(value)
        .map(|d| d >= earliest_reservation_date(today))
        .unwrap_or(false)
}

pub fn is_offered_slot(value: &str, slots: &[String]) -> bool {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").is_ok() && slots.iter().any(|s| s == value.trim())
}

/// `"09:00"` + 4h -> `"13:00"`; `None` when the end runs past midnight
pub fn end_time(start: &str, hours: u32) -> Option<String> {
    let start = NaiveTime::parse_from_str(start.trim(), "%H:%M").ok()?;
    let (end, wrapped) = start.overflowing_add_signed(chrono::Duration::hours(i64::from(hours)));
    if wrapped != 0 {
        return None;
    }
    Some(end.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_earliest_date_is_tomorrow() {
        assert_eq!(earliest_reservation_date(date(2026, 10, 17)), date(2026, 10, 18));
        assert_eq!(earliest_reservation_date(date(2026, 12, 31)), date(2027, 1, 1));
    }

    #[test]
    fn test_time_slots() {
        let slots = time_slots();
        assert_eq!(slots.len(), 15);
        assert_eq!(slots.first().map(String::as_str), Some("06:00"));
        assert_eq!(slots.last().map(String::as_str), Some("20:00"));
    }

    #[test]
    fn test_selectable_date() {
        let today = date(2026, 10, 17);
        assert!(!is_selectable_date("2026-10-17", today));
        assert!(is_selectable_date("2026-10-18", today));
        assert!(!is_selectable_date("18.10.2026", today));
    }

    #[test]
    fn test_offered_slot() {
        let slots = time_slots();
        assert!(is_offered_slot("09:00", &slots));
        assert!(!is_offered_slot("21:00", &slots));
        assert!(!is_offered_slot("09:30", &slots));
    }

    #[test]
    fn test_end_time() {
        assert_eq!(end_time("09:00", 4).as_deref(), Some("13:00"));
        assert_eq!(end_time("20:00", 5), None);
    }
}
