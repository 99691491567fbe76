//! Phone number auto-hyphenation applied on every keystroke.
//!
//! The formatter never rejects input: it strips everything that is not an
//! ASCII digit and re-inserts hyphens based on the digit count only, so
//! feeding its own output back in yields the same string.

/// Keeps ASCII digits only
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a (partially typed) phone number.
///
/// | digits | layout          |
/// |--------|-----------------|
/// | 0..=3  | `XXX`           |
/// | 4..=7  | `XXX-XXXX`      |
/// | 8..=10 | `XXX-XXX-XXXX`  |
/// | 11+    | `XXX-XXXX-XXXX` |
pub fn format_phone(raw: &str) -> String {
    let d = digits_only(raw);
    match d.len() {
        0..=3 => d,
        4..=7 => format!("{}-{}", &d[..3], &d[3..]),
        8..=10 => format!("{}-{}-{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}-{}-{}", &d[..3], &d[3..7], &d[7..]),
    }
}

/// Korean mobile number: 10 or 11 digits starting with `01`
pub fn is_valid_mobile(phone: &str) -> bool {
    let d = digits_only(phone);
    (d.len() == 10 || d.len() == 11) && d.starts_with("01")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone_by_length() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("010"), "010");
        assert_eq!(format_phone("0101"), "010-1");
        assert_eq!(format_phone("010123"), "010-123");
        assert_eq!(format_phone("0101234"), "010-1234");
        assert_eq!(format_phone("01012345"), "010-123-45");
        assert_eq!(format_phone("0212345678"), "021-234-5678");
        assert_eq!(format_phone("01012345678"), "010-1234-5678");
    }

    #[test]
    fn test_format_phone_ignores_non_digits() {
        assert_eq!(format_phone("010-12a34 5678"), "010-1234-5678");
        assert_eq!(format_phone("abc"), "");
    }

    #[test]
    fn test_format_phone_is_idempotent() {
        for raw in ["0", "0101", "0101234", "01012345", "0101234567", "01012345678"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "input {raw}");
        }
    }

    #[test]
    fn test_is_valid_mobile() {
        assert!(is_valid_mobile("010-1234-5678"));
        assert!(is_valid_mobile("011-123-4567"));
        assert!(!is_valid_mobile("02-123-4567"));
        assert!(!is_valid_mobile("010-1234"));
    }
}
