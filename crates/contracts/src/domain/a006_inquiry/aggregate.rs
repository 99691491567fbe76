use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldError, TextRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InquiryStatus {
    Pending,
    Answered,
}

impl InquiryStatus {
    pub const ALL: [InquiryStatus; 2] = [InquiryStatus::Pending, InquiryStatus::Answered];

    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "답변 대기",
            InquiryStatus::Answered => "답변 완료",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "PENDING",
            InquiryStatus::Answered => "ANSWERED",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: i64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub status: InquiryStatus,
    #[serde(default)]
    pub answer: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateInquiryDto {
    pub title: String,
    pub content: String,
}

impl CreateInquiryDto {
    pub fn validate(&self) -> Result<(), FieldError> {
        TextRules::required().max(100).check(&self.title, "제목")?;
        TextRules::required().max(2000).check(&self.content, "내용")
    }
}

/// Body of `POST /api/admin/inquiries/{id}/answer`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerInquiryDto {
    pub answer: String,
}

impl AnswerInquiryDto {
    pub fn validate(&self) -> Result<(), FieldError> {
        TextRules::required().max(2000).check(&self.answer, "답변")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_limits() {
        let mut dto = CreateInquiryDto {
            title: "예약 변경 문의".to_string(),
            content: "날짜를 바꿀 수 있나요?".to_string(),
        };
        assert!(dto.validate().is_ok());
        dto.title = "가".repeat(101);
        assert_eq!(dto.validate(), Err(FieldError::TooLong { label: "제목", max: 100 }));
        assert!(AnswerInquiryDto { answer: " ".to_string() }.validate().is_err());
    }
}
