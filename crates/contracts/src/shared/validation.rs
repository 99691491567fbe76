//! Simple field checks shared by every form

use thiserror::Error;

use super::phone::is_valid_mobile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0}을(를) 입력해 주세요")]
    Required(&'static str),
    #[error("{label}은(는) {min}자 이상이어야 합니다")]
    TooShort { label: &'static str, min: usize },
    #[error("{label}은(는) {max}자를 넘을 수 없습니다")]
    TooLong { label: &'static str, max: usize },
    #[error("{label}은(는) {min}~{max} 범위여야 합니다")]
    OutOfRange { label: &'static str, min: i64, max: i64 },
    #[error("올바른 휴대폰 번호가 아닙니다")]
    InvalidPhone,
    #[error("올바른 이메일 주소가 아닙니다")]
    InvalidEmail,
    #[error("{0}의 종료일이 시작일보다 빠릅니다")]
    InvertedPeriod(&'static str),
}

/// Validation rules for a text field.
/// Lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl TextRules {
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn optional() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
        }
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    pub fn min(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn check(&self, value: &str, label: &'static str) -> Result<(), FieldError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return if self.required {
                Err(FieldError::Required(label))
            } else {
                Ok(())
            };
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(FieldError::TooShort { label, min });
            }
        }
        if let Some(max) = self.max_length {
            if len > max {
                return Err(FieldError::TooLong { label, max });
            }
        }
        Ok(())
    }
}

pub fn require(value: &str, label: &'static str) -> Result<(), FieldError> {
    TextRules::required().check(value, label)
}

pub fn check_range(value: i64, min: i64, max: i64, label: &'static str) -> Result<(), FieldError> {
    if value < min || value > max {
        return Err(FieldError::OutOfRange { label, min, max });
    }
    Ok(())
}

pub fn check_phone(value: &str) -> Result<(), FieldError> {
    if is_valid_mobile(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

/// One `@`, non-empty local part, dotted domain without empty labels
pub fn check_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && domain.split('.').all(|label| !label.is_empty())
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(FieldError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_rules() {
        let rules = TextRules::required().min(2).max(5);
        assert_eq!(rules.check("  ", "제목"), Err(FieldError::Required("제목")));
        assert_eq!(
            rules.check("가", "제목"),
            Err(FieldError::TooShort { label: "제목", min: 2 })
        );
        assert!(rules.check("가나다라마", "제목").is_ok());
        assert_eq!(
            rules.check("가나다라마바", "제목"),
            Err(FieldError::TooLong { label: "제목", max: 5 })
        );
        assert!(TextRules::optional().max(3).check("", "메모").is_ok());
    }

    #[test]
    fn test_check_email() {
        assert!(check_email("user@example.com").is_ok());
        assert!(check_email("user@example").is_err());
        assert!(check_email("@example.com").is_err());
        assert!(check_email("user@@example.com").is_err());
        assert!(check_email("user@example..com").is_err());
        assert!(check_email("us er@example.com").is_err());
    }

    #[test]
    fn test_check_range_message() {
        let err = check_range(6, 1, 5, "평점").unwrap_err();
        assert_eq!(err.to_string(), "평점은(는) 1~5 범위여야 합니다");
    }
}
