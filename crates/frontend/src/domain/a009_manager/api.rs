use contracts::domain::a009_manager::UpdateManagerStatusDto;

use crate::shared::api_utils::{put_json, ApiError};

pub async fn update_manager_status(dto: &UpdateManagerStatusDto) -> Result<(), ApiError> {
    put_json(&format!("/api/admin/managers/{}", dto.id), dto).await
}
