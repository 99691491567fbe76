//! In-memory hand-over between the three reservation steps.
//!
//! Step 1 records the created reservation, step 2 records the confirmation.
//! The store lives only as long as the page: a reload starts empty and the
//! step guards send the user back to the first step.

use std::collections::HashMap;

use contracts::domain::a002_reservation::{ReservationConfirmation, ReservationCreated};
use leptos::prelude::*;

pub const FIRST_STEP_PATH: &str = "/reservations/new";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    Details,
    ManagerSelection,
    Summary,
}

impl FlowStep {
    pub fn label(&self) -> &'static str {
        match self {
            FlowStep::Details => "예약 정보",
            FlowStep::ManagerSelection => "매니저 선택",
            FlowStep::Summary => "예약 완료",
        }
    }

    pub fn number(&self) -> usize {
        match self {
            FlowStep::Details => 1,
            FlowStep::ManagerSelection => 2,
            FlowStep::Summary => 3,
        }
    }

    /// Route of the step for a reservation
    pub fn path(&self, reservation_id: i64) -> String {
        match self {
            FlowStep::Details => FIRST_STEP_PATH.to_string(),
            FlowStep::ManagerSelection => format!("/reservations/{}/step-2", reservation_id),
            FlowStep::Summary => format!("/reservations/{}/complete", reservation_id),
        }
    }
}

/// What a step route does with the current store contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    Render,
    Redirect(&'static str),
}

#[derive(Clone, Debug, Default)]
pub struct ReservationFlowStore {
    created: HashMap<i64, ReservationCreated>,
    confirmed: HashMap<i64, ReservationConfirmation>,
}

impl ReservationFlowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step 1 succeeded; returns the path of step 2
    pub fn record_created(&mut self, created: ReservationCreated) -> String {
        let id = created.reservation_id;
        log::debug!("reservation #{} created, entering manager selection", id);
        self.confirmed.remove(&id);
        self.created.insert(id, created);
        FlowStep::ManagerSelection.path(id)
    }

    /// Step 2 succeeded; returns the path of the summary
    pub fn record_confirmation(&mut self, confirmation: ReservationConfirmation) -> String {
        let id = confirmation.reservation_id;
        log::debug!("reservation #{} confirmed", id);
        self.confirmed.insert(id, confirmation);
        FlowStep::Summary.path(id)
    }

    pub fn created(&self, reservation_id: i64) -> Option<&ReservationCreated> {
        self.created.get(&reservation_id)
    }

    pub fn confirmation(&self, reservation_id: i64) -> Option<&ReservationConfirmation> {
        self.confirmed.get(&reservation_id)
    }

    /// Furthest step reachable for the reservation
    pub fn reachable_step(&self, reservation_id: i64) -> FlowStep {
        if self.confirmed.contains_key(&reservation_id) {
            FlowStep::Summary
        } else if self.created.contains_key(&reservation_id) {
            FlowStep::ManagerSelection
        } else {
            FlowStep::Details
        }
    }

    /// Decides whether `step` may render for the raw route id
    pub fn guard(&self, step: FlowStep, route_id: Option<&str>) -> GuardOutcome {
        if step == FlowStep::Details {
            return GuardOutcome::Render;
        }
        let id = route_id.and_then(|raw| raw.parse::<i64>().ok());
        let allowed = match (step, id) {
            (FlowStep::ManagerSelection, Some(id)) => self.created.contains_key(&id),
            (FlowStep::Summary, Some(id)) => self.confirmed.contains_key(&id),
            _ => false,
        };
        if allowed {
            GuardOutcome::Render
        } else {
            log::debug!("no flow state for {:?} of {:?}, back to step 1", step, route_id);
            GuardOutcome::Redirect(FIRST_STEP_PATH)
        }
    }

    /// Drops everything about a reservation (after the summary was shown)
    pub fn forget(&mut self, reservation_id: i64) {
        self.created.remove(&reservation_id);
        self.confirmed.remove(&reservation_id);
    }
}

/// Puts a fresh store into context; called once by the app root
pub fn provide_flow_store() -> RwSignal<ReservationFlowStore> {
    let store = RwSignal::new(ReservationFlowStore::new());
    provide_context(store);
    store
}

pub fn use_flow_store() -> RwSignal<ReservationFlowStore> {
    use_context::<RwSignal<ReservationFlowStore>>()
        .expect("ReservationFlowStore not found in context")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_reservation::{ManagerIdentity, PaymentMethod, PriceBreakdown};

    fn created(id: i64) -> ReservationCreated {
        ReservationCreated {
            reservation_id: id,
            main_service_name: "기본청소".to_string(),
            additional_service_names: vec!["냉장고청소".to_string()],
            request_date: "2026-10-18".to_string(),
            start_time: "09:00".to_string(),
            road_address: "서울특별시 강남구 테헤란로 123".to_string(),
            detail_address: "101동 1001호".to_string(),
            price: 40000,
            turnaround: 4,
            memo: String::new(),
        }
    }

    fn confirmation(id: i64) -> ReservationConfirmation {
        ReservationConfirmation {
            reservation_id: id,
            main_service_name: "기본청소".to_string(),
            additional_service_names: vec!["냉장고청소".to_string()],
            request_date: "2026-10-18".to_string(),
            start_time: "09:00".to_string(),
            turnaround: 4,
            road_address: "서울특별시 강남구 테헤란로 123".to_string(),
            detail_address: "101동 1001호".to_string(),
            manager: ManagerIdentity {
                manager_id: 7,
                name: "김매니저".to_string(),
                phone: None,
            },
            price: PriceBreakdown {
                main: 30000,
                extras: 10000,
                total: 40000,
            },
            payment_method: PaymentMethod::Card,
        }
    }

    #[test]
    fn test_fresh_store_redirects_every_later_step() {
        // a page reload starts from an empty store
        let store = ReservationFlowStore::new();
        assert_eq!(
            store.guard(FlowStep::ManagerSelection, Some("42")),
            GuardOutcome::Redirect("/reservations/new")
        );
        assert_eq!(
            store.guard(FlowStep::Summary, Some("42")),
            GuardOutcome::Redirect("/reservations/new")
        );
        assert_eq!(store.guard(FlowStep::Details, None), GuardOutcome::Render);
    }

    #[test]
    fn test_created_unlocks_step_two_only() {
        let mut store = ReservationFlowStore::new();
        let next = store.record_created(created(42));
        assert_eq!(next, "/reservations/42/step-2");
        assert_eq!(store.guard(FlowStep::ManagerSelection, Some("42")), GuardOutcome::Render);
        assert_eq!(
            store.guard(FlowStep::ManagerSelection, Some("43")),
            GuardOutcome::Redirect(FIRST_STEP_PATH)
        );
        assert_eq!(
            store.guard(FlowStep::Summary, Some("42")),
            GuardOutcome::Redirect(FIRST_STEP_PATH)
        );
        assert_eq!(store.reachable_step(42), FlowStep::ManagerSelection);
        assert_eq!(store.created(42).map(|c| c.price), Some(40000));
    }

    #[test]
    fn test_confirmation_unlocks_summary() {
        let mut store = ReservationFlowStore::new();
        store.record_created(created(42));
        let next = store.record_confirmation(confirmation(42));
        assert_eq!(next, "/reservations/42/complete");
        assert_eq!(store.guard(FlowStep::Summary, Some("42")), GuardOutcome::Render);
        assert_eq!(store.reachable_step(42), FlowStep::Summary);
    }

    #[test]
    fn test_malformed_route_id_redirects() {
        let mut store = ReservationFlowStore::new();
        store.record_created(created(42));
        assert_eq!(
            store.guard(FlowStep::ManagerSelection, Some("abc")),
            GuardOutcome::Redirect(FIRST_STEP_PATH)
        );
        assert_eq!(
            store.guard(FlowStep::ManagerSelection, None),
            GuardOutcome::Redirect(FIRST_STEP_PATH)
        );
    }

    #[test]
    fn test_forget_and_recreate() {
        let mut store = ReservationFlowStore::new();
        store.record_created(created(42));
        store.record_confirmation(confirmation(42));
        store.forget(42);
        assert_eq!(store.reachable_step(42), FlowStep::Details);

        store.record_confirmation(confirmation(42));
        store.record_created(created(42));
        // re-creating resets a stale confirmation
        assert_eq!(store.reachable_step(42), FlowStep::ManagerSelection);
    }
}
