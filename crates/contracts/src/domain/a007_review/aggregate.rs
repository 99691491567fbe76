use serde::{Deserialize, Serialize};

use crate::shared::validation::{check_range, FieldError, TextRules};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub reservation_id: i64,
    pub author: String,
    #[serde(default)]
    pub manager_name: String,
    pub rating: u8,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub reservation_id: i64,
    pub rating: u8,
    pub content: String,
}

impl CreateReviewDto {
    pub fn validate(&self) -> Result<(), FieldError> {
        check_range(i64::from(self.rating), 1, 5, "평점")?;
        TextRules::required().min(10).max(500).check(&self.content, "리뷰 내용")
    }
}

/// `"★★★☆☆"` for a 3-star rating
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_validation() {
        let mut dto = CreateReviewDto {
            reservation_id: 1,
            rating: 5,
            content: "꼼꼼하게 청소해 주셔서 감사합니다".to_string(),
        };
        assert!(dto.validate().is_ok());
        dto.rating = 0;
        assert!(matches!(dto.validate(), Err(FieldError::OutOfRange { .. })));
        dto.rating = 4;
        dto.content = "좋아요".to_string();
        assert_eq!(
            dto.validate(),
            Err(FieldError::TooShort { label: "리뷰 내용", min: 10 })
        );
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(9), "★★★★★");
    }
}
