//! Single place for role and ownership rules behind every action button.

use thiserror::Error;

use super::auth::{Role, UserInfo};
use crate::domain::a002_reservation::ReservationStatus;

/// Tunables of the rules; the frontend fills this from its config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    /// Only this account may edit or delete other admins
    pub root_username: String,
    /// Accounts whose name contains this marker cannot be deleted
    pub protected_marker: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            root_username: "root".to_string(),
            protected_marker: "test".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
    Cancel,
    Start,
    Complete,
    WriteReview,
    Answer,
}

/// What the action is applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// Any admin-only resource without ownership rules (notices, banners, ...)
    AdminResource,
    Account {
        id: i64,
        username: &'a str,
        name: &'a str,
        role: Role,
    },
    Reservation {
        customer_id: i64,
        manager_id: Option<i64>,
        status: ReservationStatus,
        reviewed: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DenyReason {
    #[error("권한이 없습니다")]
    Forbidden,
    #[error("본인 계정은 삭제할 수 없습니다")]
    SelfDelete,
    #[error("다른 관리자 계정은 최고 관리자만 변경할 수 있습니다")]
    RootOnly,
    #[error("보호된 계정은 삭제할 수 없습니다")]
    Protected,
    #[error("현재 상태에서는 처리할 수 없습니다")]
    InvalidState,
    #[error("이미 리뷰를 작성했습니다")]
    AlreadyReviewed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn into_result(self) -> Result<(), DenyReason> {
        match self {
            Decision::Allow => Ok(()),
            Decision::Deny(reason) => Err(reason),
        }
    }
}

fn deny(reason: DenyReason) -> Decision {
    Decision::Deny(reason)
}

fn allow_if(condition: bool, reason: DenyReason) -> Decision {
    if condition {
        Decision::Allow
    } else {
        deny(reason)
    }
}

/// Evaluates `(actor, action, target)`
pub fn evaluate(config: &PolicyConfig, actor: &UserInfo, action: Action, target: Target<'_>) -> Decision {
    match target {
        Target::AdminResource => allow_if(actor.role == Role::Admin, DenyReason::Forbidden),
        Target::Account {
            id,
            username,
            name,
            role,
        } => evaluate_account(config, actor, action, id, username, name, role),
        Target::Reservation {
            customer_id,
            manager_id,
            status,
            reviewed,
        } => evaluate_reservation(actor, action, customer_id, manager_id, status, reviewed),
    }
}

fn evaluate_account(
    config: &PolicyConfig,
    actor: &UserInfo,
    action: Action,
    id: i64,
    username: &str,
    name: &str,
    role: Role,
) -> Decision {
    if actor.role != Role::Admin {
        return deny(DenyReason::Forbidden);
    }
    let is_self = actor.id == id;
    let is_root = actor.username == config.root_username;

    match action {
        Action::View | Action::Create => Decision::Allow,
        Action::Edit => {
            if role == Role::Admin && !is_self && !is_root {
                return deny(DenyReason::RootOnly);
            }
            Decision::Allow
        }
        Action::Delete => {
            if is_self {
                return deny(DenyReason::SelfDelete);
            }
            let marker = config.protected_marker.to_lowercase();
            if !marker.is_empty()
                && (name.to_lowercase().contains(&marker) || username.to_lowercase().contains(&marker))
            {
                return deny(DenyReason::Protected);
            }
            if role == Role::Admin && !is_root {
                return deny(DenyReason::RootOnly);
            }
            Decision::Allow
        }
        _ => deny(DenyReason::InvalidState),
    }
}

fn evaluate_reservation(
    actor: &UserInfo,
    action: Action,
    customer_id: i64,
    manager_id: Option<i64>,
    status: ReservationStatus,
    reviewed: bool,
) -> Decision {
    let owns = actor.role == Role::Customer && actor.id == customer_id;
    let assigned = actor.role == Role::Manager && manager_id == Some(actor.id);
    let admin = actor.role == Role::Admin;

    match action {
        Action::View => allow_if(owns || assigned || admin, DenyReason::Forbidden),
        Action::Edit | Action::Delete => allow_if(admin, DenyReason::Forbidden),
        Action::Cancel => {
            if !(owns || admin) {
                return deny(DenyReason::Forbidden);
            }
            allow_if(
                status.can_transition_to(ReservationStatus::Cancelled),
                DenyReason::InvalidState,
            )
        }
        Action::Start => {
            if !assigned {
                return deny(DenyReason::Forbidden);
            }
            allow_if(
                status.can_transition_to(ReservationStatus::InProgress),
                DenyReason::InvalidState,
            )
        }
        Action::Complete => {
            if !assigned {
                return deny(DenyReason::Forbidden);
            }
            allow_if(
                status.can_transition_to(ReservationStatus::Completed),
                DenyReason::InvalidState,
            )
        }
        Action::WriteReview => {
            if !owns {
                return deny(DenyReason::Forbidden);
            }
            if status != ReservationStatus::Completed {
                return deny(DenyReason::InvalidState);
            }
            allow_if(!reviewed, DenyReason::AlreadyReviewed)
        }
        Action::Create | Action::Answer => deny(DenyReason::Forbidden),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str, role: Role) -> UserInfo {
        UserInfo {
            id,
            username: username.to_string(),
            name: username.to_string(),
            role,
        }
    }

    fn account(id: i64, username: &str, role: Role) -> Target<'_> {
        Target::Account {
            id,
            username,
            name: username,
            role,
        }
    }

    fn reservation(customer_id: i64, manager_id: Option<i64>, status: ReservationStatus) -> Target<'static> {
        Target::Reservation {
            customer_id,
            manager_id,
            status,
            reviewed: false,
        }
    }

    #[test]
    fn test_cannot_delete_self() {
        let config = PolicyConfig::default();
        let root = user(1, "root", Role::Admin);
        assert_eq!(
            evaluate(&config, &root, Action::Delete, account(1, "root", Role::Admin)),
            Decision::Deny(DenyReason::SelfDelete)
        );
    }

    #[test]
    fn test_only_root_touches_other_admins() {
        let config = PolicyConfig::default();
        let root = user(1, "root", Role::Admin);
        let admin = user(2, "operator", Role::Admin);
        let other = account(3, "support", Role::Admin);

        assert!(evaluate(&config, &root, Action::Edit, other).is_allowed());
        assert!(evaluate(&config, &root, Action::Delete, other).is_allowed());
        assert_eq!(
            evaluate(&config, &admin, Action::Edit, other),
            Decision::Deny(DenyReason::RootOnly)
        );
        assert!(evaluate(&config, &admin, Action::Edit, account(2, "operator", Role::Admin)).is_allowed());
        assert!(evaluate(&config, &admin, Action::Delete, account(4, "kim", Role::Customer)).is_allowed());
    }

    #[test]
    fn test_protected_marker_blocks_delete() {
        let config = PolicyConfig::default();
        let root = user(1, "root", Role::Admin);
        assert_eq!(
            evaluate(&config, &root, Action::Delete, account(9, "qa_TEST_01", Role::Customer)),
            Decision::Deny(DenyReason::Protected)
        );
        assert!(evaluate(&config, &root, Action::Edit, account(9, "qa_TEST_01", Role::Customer)).is_allowed());
    }

    #[test]
    fn test_non_admin_denied_admin_resources() {
        let config = PolicyConfig::default();
        let customer = user(5, "hong", Role::Customer);
        assert_eq!(
            evaluate(&config, &customer, Action::Delete, Target::AdminResource),
            Decision::Deny(DenyReason::Forbidden)
        );
        assert_eq!(
            evaluate(&config, &customer, Action::View, account(6, "lee", Role::Customer)),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn test_customer_cancels_own_pending_reservation() {
        let config = PolicyConfig::default();
        let customer = user(5, "hong", Role::Customer);
        use ReservationStatus::*;
        assert!(evaluate(&config, &customer, Action::Cancel, reservation(5, None, Pending)).is_allowed());
        assert_eq!(
            evaluate(&config, &customer, Action::Cancel, reservation(5, Some(7), InProgress)),
            Decision::Deny(DenyReason::InvalidState)
        );
        assert_eq!(
            evaluate(&config, &customer, Action::Cancel, reservation(6, None, Pending)),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn test_manager_works_assigned_reservations_only() {
        let config = PolicyConfig::default();
        let manager = user(7, "mgr", Role::Manager);
        use ReservationStatus::*;
        assert!(evaluate(&config, &manager, Action::Start, reservation(5, Some(7), Confirmed)).is_allowed());
        assert!(evaluate(&config, &manager, Action::Complete, reservation(5, Some(7), InProgress)).is_allowed());
        assert_eq!(
            evaluate(&config, &manager, Action::Complete, reservation(5, Some(7), Confirmed)),
            Decision::Deny(DenyReason::InvalidState)
        );
        assert_eq!(
            evaluate(&config, &manager, Action::Start, reservation(5, Some(8), Confirmed)),
            Decision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn test_review_once_after_completion() {
        let config = PolicyConfig::default();
        let customer = user(5, "hong", Role::Customer);
        let completed = reservation(5, Some(7), ReservationStatus::Completed);
        assert!(evaluate(&config, &customer, Action::WriteReview, completed).is_allowed());

        let reviewed = Target::Reservation {
            customer_id: 5,
            manager_id: Some(7),
            status: ReservationStatus::Completed,
            reviewed: true,
        };
        assert_eq!(
            evaluate(&config, &customer, Action::WriteReview, reviewed).into_result(),
            Err(DenyReason::AlreadyReviewed)
        );
    }
}
