use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagerStatus {
    Pending,
    Active,
    Suspended,
}

impl ManagerStatus {
    pub const ALL: [ManagerStatus; 3] = [
        ManagerStatus::Pending,
        ManagerStatus::Active,
        ManagerStatus::Suspended,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ManagerStatus::Pending => "승인 대기",
            ManagerStatus::Active => "활동중",
            ManagerStatus::Suspended => "활동 정지",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ManagerStatus::Pending => "PENDING",
            ManagerStatus::Active => "ACTIVE",
            ManagerStatus::Suspended => "SUSPENDED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub region: String,
    pub status: ManagerStatus,
    #[serde(default)]
    pub rating: f32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManagerStatusDto {
    pub id: i64,
    pub status: ManagerStatus,
}
