use serde::{Deserialize, Serialize};

use crate::shared::validation::{check_email, check_phone, FieldError, TextRules};
use crate::system::auth::Role;

/// Platform account as listed on the admin accounts page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountDto {
    pub username: String,
    pub password: String,
    pub name: String,
    pub role: Role,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountDto {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateAccountDto {
    pub fn from_account(account: &Account) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            role: account.role,
            email: account.email.clone(),
            phone: account.phone.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        TextRules::required().max(30).check(&self.name, "이름")?;
        validate_contacts(self.email.as_deref(), self.phone.as_deref())
    }
}

impl CreateAccountDto {
    pub fn validate(&self) -> Result<(), FieldError> {
        TextRules::required().min(4).max(20).check(&self.username, "아이디")?;
        TextRules::required().min(8).max(64).check(&self.password, "비밀번호")?;
        TextRules::required().max(30).check(&self.name, "이름")?;
        validate_contacts(self.email.as_deref(), self.phone.as_deref())
    }
}

fn validate_contacts(email: Option<&str>, phone: Option<&str>) -> Result<(), FieldError> {
    if let Some(email) = email.filter(|e| !e.trim().is_empty()) {
        check_email(email)?;
    }
    if let Some(phone) = phone.filter(|p| !p.trim().is_empty()) {
        check_phone(phone)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_validation() {
        let mut dto = CreateAccountDto {
            username: "manager01".to_string(),
            password: "secret-pass".to_string(),
            name: "김매니저".to_string(),
            role: Role::Manager,
            email: Some("".to_string()),
            phone: Some("010-1234-5678".to_string()),
        };
        assert!(dto.validate().is_ok());

        dto.password = "short".to_string();
        assert_eq!(
            dto.validate(),
            Err(FieldError::TooShort { label: "비밀번호", min: 8 })
        );

        dto.password = "secret-pass".to_string();
        dto.phone = Some("02-000".to_string());
        assert_eq!(dto.validate(), Err(FieldError::InvalidPhone));
    }
}
