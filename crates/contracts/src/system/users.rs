use serde::{Deserialize, Serialize};

/// `GET /api/users/me/profile`; used to pre-fill the reservation form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub road_address: String,
    #[serde(default)]
    pub detail_address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}
