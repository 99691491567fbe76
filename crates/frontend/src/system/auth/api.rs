use contracts::system::auth::{
    LoginRequest, LoginResponse, RefreshRequest, RefreshResponse, UserInfo,
};

use crate::shared::api_utils::{get_json, post_json, post_unit, ApiError};

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_json("/api/auth/login", &request).await
}

/// Exchange the refresh token for a new access token
pub async fn refresh_token(refresh_token: String) -> Result<RefreshResponse, ApiError> {
    let request = RefreshRequest { refresh_token };
    post_json("/api/auth/refresh", &request).await
}

/// Logout (revoke refresh token)
pub async fn logout(refresh_token: String) -> Result<(), ApiError> {
    let request = RefreshRequest { refresh_token };
    post_unit("/api/auth/logout", &request).await
}

/// Current user for the stored access token
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    get_json("/api/auth/me").await
}
