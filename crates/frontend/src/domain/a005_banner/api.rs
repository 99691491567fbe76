use contracts::domain::a005_banner::{Banner, BannerDto};

use crate::shared::api_utils::{get_json, post_unit, put_json, ApiError};
use crate::shared::date_utils::today;

const ADMIN_ROOT: &str = "/api/admin/banners";

pub async fn save_banner(dto: &BannerDto) -> Result<(), ApiError> {
    match dto.id {
        Some(id) => put_json(&format!("{}/{}", ADMIN_ROOT, id), dto).await,
        None => post_unit(ADMIN_ROOT, dto).await,
    }
}

/// Banners the backend reports active, re-checked against today's date
pub async fn fetch_active_banners() -> Result<Vec<Banner>, ApiError> {
    let banners: Vec<Banner> = get_json("/api/banners/active").await?;
    let today = today();
    Ok(banners.into_iter().filter(|b| b.is_visible_on(today)).collect())
}
