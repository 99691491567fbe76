use contracts::domain::a003_account::{CreateAccountDto, UpdateAccountDto};

use crate::shared::api_utils::{post_unit, put_json, ApiError};

const ROOT: &str = "/api/admin/accounts";

pub async fn create_account(dto: &CreateAccountDto) -> Result<(), ApiError> {
    post_unit(ROOT, dto).await
}

pub async fn update_account(dto: &UpdateAccountDto) -> Result<(), ApiError> {
    put_json(&format!("{}/{}", ROOT, dto.id), dto).await
}
