use contracts::domain::a004_notice::{sort_for_display, Notice, NoticeDto};
use contracts::shared::page::{ListQuery, Page};

use crate::shared::api_utils::{get_json_with_query, post_unit, put_json, ApiError};

const ADMIN_ROOT: &str = "/api/admin/notices";

/// Create when `dto.id` is empty, update otherwise
pub async fn save_notice(dto: &NoticeDto) -> Result<(), ApiError> {
    match dto.id {
        Some(id) => put_json(&format!("{}/{}", ADMIN_ROOT, id), dto).await,
        None => post_unit(ADMIN_ROOT, dto).await,
    }
}

/// Pinned notices for the home page, newest first
pub async fn fetch_pinned_notices(limit: usize) -> Result<Vec<Notice>, ApiError> {
    let page: Page<Notice> = get_json_with_query("/api/notices", &ListQuery::new(limit)).await?;
    let mut notices = page.content;
    sort_for_display(&mut notices);
    notices.retain(|n| n.pinned);
    Ok(notices)
}
