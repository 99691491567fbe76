use contracts::domain::a003_account::Account;
use contracts::system::auth::Role;
use contracts::system::policy::Target;
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::{status_badge, ListResource};

impl Searchable for Account {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.username, keyword)
            || contains_ci(&self.name, keyword)
            || self.email.as_deref().is_some_and(|e| contains_ci(e, keyword))
            || self.phone.as_deref().is_some_and(|p| contains_ci(p, keyword))
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.role.code())
    }
}

fn role_tone(role: Role) -> &'static str {
    match role {
        Role::Admin => "error",
        Role::Manager => "info",
        Role::Customer => "neutral",
    }
}

pub struct Accounts;

impl ListResource for Accounts {
    type Row = Account;

    const ENDPOINT: &'static str = "/api/admin/accounts";

    fn columns() -> Vec<&'static str> {
        vec!["아이디", "이름", "권한", "이메일", "연락처", "가입일"]
    }

    fn cells(row: &Account) -> Vec<AnyView> {
        vec![
            row.username.clone().into_any(),
            row.name.clone().into_any(),
            status_badge(row.role.label(), role_tone(row.role)),
            row.email.clone().unwrap_or_default().into_any(),
            row.phone.clone().unwrap_or_default().into_any(),
            format_date(&row.created_at).into_any(),
        ]
    }

    fn row_id(row: &Account) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        Role::ALL.into_iter().map(|r| (r.code(), r.label())).collect()
    }

    fn target(row: &Account) -> Target<'_> {
        Target::Account {
            id: row.id,
            username: &row.username,
            name: &row.name,
            role: row.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;
    use contracts::system::policy::{Action, Decision, DenyReason, PolicyConfig};

    fn account(id: i64, username: &str, role: Role) -> Account {
        Account {
            id,
            username: username.to_string(),
            name: format!("{} 님", username),
            role,
            email: Some(format!("{}@example.com", username)),
            phone: None,
            created_at: "2026-01-02T10:00:00".to_string(),
        }
    }

    fn actor(id: i64, username: &str) -> UserInfo {
        UserInfo {
            id,
            username: username.to_string(),
            name: username.to_string(),
            role: Role::Admin,
        }
    }

    #[test]
    fn test_keyword_matches_email() {
        let row = account(3, "kim", Role::Customer);
        assert!(row.matches_keyword("EXAMPLE"));
        assert!(!row.matches_keyword("park"));
        assert_eq!(row.status_code(), Some("CUSTOMER"));
    }

    #[test]
    fn test_row_gating_uses_account_rules() {
        let config = PolicyConfig::default();
        let me = actor(1, "operator");
        assert_eq!(
            Accounts::decide(&config, &me, Action::Delete, &account(1, "operator", Role::Admin)),
            Decision::Deny(DenyReason::SelfDelete)
        );
        assert_eq!(
            Accounts::decide(&config, &me, Action::Edit, &account(2, "other", Role::Admin)),
            Decision::Deny(DenyReason::RootOnly)
        );
        assert!(Accounts::decide(&config, &me, Action::Delete, &account(4, "lee", Role::Customer)).is_allowed());
    }
}
