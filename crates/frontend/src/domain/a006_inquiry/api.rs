use contracts::domain::a006_inquiry::{AnswerInquiryDto, CreateInquiryDto};

use crate::shared::api_utils::{post_unit, ApiError};

pub async fn create_inquiry(dto: &CreateInquiryDto) -> Result<(), ApiError> {
    post_unit("/api/inquiries/me", dto).await
}

pub async fn answer_inquiry(inquiry_id: i64, dto: &AnswerInquiryDto) -> Result<(), ApiError> {
    post_unit(&format!("/api/admin/inquiries/{}/answer", inquiry_id), dto).await
}
