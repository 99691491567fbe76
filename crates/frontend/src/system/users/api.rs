use contracts::system::users::UserProfile;

use crate::shared::api_utils::{get_json, ApiError};

/// Contact and address details saved on the signed-in customer's profile
pub async fn fetch_my_profile() -> Result<UserProfile, ApiError> {
    get_json("/api/users/me/profile").await
}
