use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Status
// ============================================================================

/// Lifecycle of a reservation.
///
/// `Pending -> Matched -> Confirmed -> InProgress -> Completed`, with
/// `Cancelled` reachable until the work has started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    Pending,
    Matched,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("'{}' 상태에서 '{}'(으)로 변경할 수 없습니다", .from.label(), .to.label())]
pub struct InvalidTransition {
    pub from: ReservationStatus,
    pub to: ReservationStatus,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 6] = [
        ReservationStatus::Pending,
        ReservationStatus::Matched,
        ReservationStatus::Confirmed,
        ReservationStatus::InProgress,
        ReservationStatus::Completed,
        ReservationStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "매칭 대기",
            ReservationStatus::Matched => "매칭 완료",
            ReservationStatus::Confirmed => "예약 확정",
            ReservationStatus::InProgress => "서비스 진행중",
            ReservationStatus::Completed => "서비스 완료",
            ReservationStatus::Cancelled => "취소",
        }
    }

    /// Wire code, e.g. `IN_PROGRESS`
    pub fn code(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "PENDING",
            ReservationStatus::Matched => "MATCHED",
            ReservationStatus::Confirmed => "CONFIRMED",
            ReservationStatus::InProgress => "IN_PROGRESS",
            ReservationStatus::Completed => "COMPLETED",
            ReservationStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ReservationStatus::Completed | ReservationStatus::Cancelled)
    }

    pub fn can_transition_to(&self, next: ReservationStatus) -> bool {
        use ReservationStatus::*;
        matches!(
            (self, next),
            (Pending, Matched)
                | (Matched, Confirmed)
                | (Confirmed, InProgress)
                | (InProgress, Completed)
                | (Pending, Cancelled)
                | (Matched, Cancelled)
                | (Confirmed, Cancelled)
        )
    }

    pub fn transition(self, next: ReservationStatus) -> Result<ReservationStatus, InvalidTransition> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(InvalidTransition { from: self, to: next })
        }
    }
}

// ============================================================================
// Payment
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
    BankTransfer,
    OnSite,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::BankTransfer,
        PaymentMethod::OnSite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "신용카드",
            PaymentMethod::BankTransfer => "계좌이체",
            PaymentMethod::OnSite => "현장결제",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "CARD",
            PaymentMethod::BankTransfer => "BANK_TRANSFER",
            PaymentMethod::OnSite => "ON_SITE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }
}

// ============================================================================
// List row
// ============================================================================

/// Row of the reservation lists (customer, manager and admin views)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub manager_id: Option<i64>,
    #[serde(default)]
    pub manager_name: Option<String>,
    pub service_name: String,
    pub request_date: String,
    pub start_time: String,
    pub status: ReservationStatus,
    pub price: u64,
    #[serde(default)]
    pub reviewed: bool,
}

/// Admin edit payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReservationDto {
    pub id: i64,
    pub request_date: String,
    pub start_time: String,
    pub status: ReservationStatus,
    #[serde(default)]
    pub manager_id: Option<i64>,
}

/// Status change issued by managers and customers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    pub status: ReservationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReservationStatus::*;

    #[test]
    fn test_happy_path() {
        let status = Pending
            .transition(Matched)
            .and_then(|s| s.transition(Confirmed))
            .and_then(|s| s.transition(InProgress))
            .and_then(|s| s.transition(Completed));
        assert_eq!(status, Ok(Completed));
    }

    #[test]
    fn test_cancel_only_before_work_starts() {
        assert!(Pending.can_transition_to(Cancelled));
        assert!(Confirmed.can_transition_to(Cancelled));
        assert!(!InProgress.can_transition_to(Cancelled));
        assert!(!Completed.can_transition_to(Cancelled));
    }

    #[test]
    fn test_rejects_skips_and_reversals() {
        let err = Pending.transition(Completed).unwrap_err();
        assert_eq!(err, InvalidTransition { from: Pending, to: Completed });
        assert!(!Completed.can_transition_to(InProgress));
        assert!(!Cancelled.can_transition_to(Pending));
        assert!(Completed.is_terminal() && Cancelled.is_terminal());
    }

    #[test]
    fn test_wire_codes() {
        assert_eq!(serde_json::to_string(&InProgress).unwrap(), "\"IN_PROGRESS\"");
        for status in ReservationStatus::ALL {
            assert_eq!(ReservationStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(
            serde_json::to_string(&PaymentMethod::BankTransfer).unwrap(),
            "\"BANK_TRANSFER\""
        );
    }
}
