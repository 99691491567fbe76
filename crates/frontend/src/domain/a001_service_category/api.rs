use contracts::domain::a001_service_category::{ServiceCatalog, ServiceCategoryNode};

use crate::shared::api_utils::{get_json, ApiError};

/// The full category tree; main services at the root
pub async fn fetch_catalog() -> Result<ServiceCatalog, ApiError> {
    let roots: Vec<ServiceCategoryNode> = get_json("/api/service-categories").await?;
    log::debug!("loaded {} main services", roots.len());
    Ok(ServiceCatalog::new(roots))
}
