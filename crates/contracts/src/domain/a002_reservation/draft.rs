//! Mutable booking form of the first reservation step

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::dto::CreateReservationRequest;
use super::pricing::{compute_breakdown, compute_quote, PriceBreakdown, PriceQuote};
use super::schedule;
use crate::domain::a001_service_category::{ServiceCatalog, ServiceCategoryNode};
use crate::shared::phone::format_phone;
use crate::system::users::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("도로명 주소를 입력해 주세요")]
    MissingRoadAddress,
    #[error("상세 주소를 입력해 주세요")]
    MissingDetailAddress,
    #[error("연락처를 입력해 주세요")]
    MissingPhone,
    #[error("예약 날짜를 선택해 주세요")]
    MissingRequestDate,
    #[error("시작 시간을 선택해 주세요")]
    MissingStartTime,
    #[error("서비스를 선택해 주세요")]
    MissingMainService,
    #[error("예약은 {earliest}부터 가능합니다")]
    DateTooEarly { earliest: NaiveDate },
    #[error("선택할 수 없는 시간입니다: {0}")]
    UnavailableSlot(String),
}

/// Booking form state.
///
/// `main_service_id == 0` means no main service is selected. Add-on ids are
/// kept in a `BTreeSet` so the submitted array has a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDraft {
    pub main_service_id: i64,
    pub additional_service_ids: BTreeSet<i64>,
    pub phone: String,
    pub road_address: String,
    pub detail_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub request_date: String,
    pub start_time: String,
    pub memo: String,
}

impl ReservationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills contact and address fields from the profile, keeping anything
    /// the user already typed.
    pub fn apply_profile(&mut self, profile: &UserProfile) {
        if self.phone.trim().is_empty() {
            self.phone = format_phone(&profile.phone);
        }
        if self.road_address.trim().is_empty() {
            self.road_address = profile.road_address.clone();
            self.latitude = profile.latitude;
            self.longitude = profile.longitude;
        }
        if self.detail_address.trim().is_empty() {
            self.detail_address = profile.detail_address.clone();
        }
    }

    pub fn set_phone(&mut self, raw: &str) {
        self.phone = format_phone(raw);
    }

    /// Address picked from the geocoding widget
    pub fn set_address(&mut self, road_address: String, latitude: f64, longitude: f64) {
        self.road_address = road_address;
        self.latitude = latitude;
        self.longitude = longitude;
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 || self.longitude != 0.0
    }

    /// Selects a main service and drops add-ons that do not belong to it
    pub fn select_main_service(&mut self, catalog: &ServiceCatalog, id: i64) {
        self.main_service_id = id;
        let eligible = catalog.eligible_add_ons(id);
        self.additional_service_ids
            .retain(|add_on| eligible.iter().any(|n| n.id == *add_on));
    }

    /// Toggles an add-on of the current main service.
    /// Returns `false` (and changes nothing) for ids outside that main service.
    pub fn toggle_add_on(&mut self, catalog: &ServiceCatalog, id: i64) -> bool {
        let eligible = catalog
            .find_main(self.main_service_id)
            .map(|m| m.has_child(id))
            .unwrap_or(false);
        if !eligible {
            return false;
        }
        if !self.additional_service_ids.remove(&id) {
            self.additional_service_ids.insert(id);
        }
        true
    }

    pub fn main_service<'a>(&self, catalog: &'a ServiceCatalog) -> Option<&'a ServiceCategoryNode> {
        catalog.find_main(self.main_service_id)
    }

    pub fn quote(&self, catalog: &ServiceCatalog) -> PriceQuote {
        compute_quote(
            self.main_service(catalog),
            catalog.eligible_add_ons(self.main_service_id),
            &self.additional_service_ids,
        )
    }

    pub fn breakdown(&self, catalog: &ServiceCatalog) -> PriceBreakdown {
        compute_breakdown(
            self.main_service(catalog),
            catalog.eligible_add_ons(self.main_service_id),
            &self.additional_service_ids,
        )
    }

    /// A zero-price main service stands for "nothing chosen yet"
    pub fn is_submit_disabled(&self, catalog: &ServiceCatalog) -> bool {
        self.main_service(catalog)
            .map(|m| m.is_free_main())
            .unwrap_or(false)
    }

    /// Every missing required field, in form order
    pub fn missing_fields(&self) -> Vec<DraftError> {
        let mut errors = Vec::new();
        if self.road_address.trim().is_empty() {
            errors.push(DraftError::MissingRoadAddress);
        }
        if self.detail_address.trim().is_empty() {
            errors.push(DraftError::MissingDetailAddress);
        }
        if self.phone.trim().is_empty() {
            errors.push(DraftError::MissingPhone);
        }
        if self.request_date.trim().is_empty() {
            errors.push(DraftError::MissingRequestDate);
        }
        if self.start_time.trim().is_empty() {
            errors.push(DraftError::MissingStartTime);
        }
        if self.main_service_id == 0 {
            errors.push(DraftError::MissingMainService);
        }
        errors
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        match self.missing_fields().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Date must be tomorrow or later and the time one of the offered slots
    pub fn validate_schedule(&self, today: NaiveDate, slots: &[String]) -> Result<(), DraftError> {
        if !schedule::is_selectable_date(&self.request_date, today) {
            return Err(DraftError::DateTooEarly {
                earliest: schedule::earliest_reservation_date(today),
            });
        }
        if !schedule::is_offered_slot(&self.start_time, slots) {
            return Err(DraftError::UnavailableSlot(self.start_time.clone()));
        }
        Ok(())
    }

    /// Builds the create request with the computed turnaround and price.
    ///
    /// Only add-ons of the selected main service are sent.
    pub fn to_request(&self, catalog: &ServiceCatalog) -> Result<CreateReservationRequest, DraftError> {
        self.validate()?;
        let quote = self.quote(catalog);
        let eligible = catalog.eligible_add_ons(self.main_service_id);
        let additional_service_ids = self
            .additional_service_ids
            .iter()
            .copied()
            .filter(|id| eligible.iter().any(|n| n.id == *id))
            .collect();

        Ok(CreateReservationRequest {
            main_service_id: self.main_service_id,
            additional_service_ids,
            phone: self.phone.trim().to_string(),
            road_address: self.road_address.trim().to_string(),
            detail_address: self.detail_address.trim().to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            request_date: self.request_date.trim().to_string(),
            start_time: self.start_time.trim().to_string(),
            memo: self.memo.trim().to_string(),
            turnaround: quote.time,
            price: quote.price,
        })
    }

    /// Full pre-submit check: required fields first, then the schedule rules
    pub fn prepare_submission(
        &self,
        catalog: &ServiceCatalog,
        today: NaiveDate,
        slots: &[String],
    ) -> Result<CreateReservationRequest, DraftError> {
        self.validate()?;
        self.validate_schedule(today, slots)?;
        self.to_request(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_service_category::aggregate::fixtures::{catalog, node};

    fn filled(catalog: &ServiceCatalog) -> ReservationDraft {
        let mut draft = ReservationDraft::new();
        draft.select_main_service(catalog, 1);
        draft.set_address("서울특별시 강남구 테헤란로 123".to_string(), 37.5, 127.03);
        draft.detail_address = "101동 1001호".to_string();
        draft.set_phone("01012345678");
        draft.request_date = "2026-10-18".to_string();
        draft.start_time = "09:00".to_string();
        draft
    }

    fn clear_field(draft: &mut ReservationDraft, field: &DraftError) {
        match field {
            DraftError::MissingRoadAddress => draft.road_address.clear(),
            DraftError::MissingDetailAddress => draft.detail_address = "  ".to_string(),
            DraftError::MissingPhone => draft.phone.clear(),
            DraftError::MissingRequestDate => draft.request_date.clear(),
            DraftError::MissingStartTime => draft.start_time.clear(),
            DraftError::MissingMainService => draft.main_service_id = 0,
            other => panic!("not a required field: {other:?}"),
        }
    }

    #[test]
    fn test_each_missing_field_blocks_request() {
        let catalog = catalog();
        let required = [
            DraftError::MissingRoadAddress,
            DraftError::MissingDetailAddress,
            DraftError::MissingPhone,
            DraftError::MissingRequestDate,
            DraftError::MissingStartTime,
            DraftError::MissingMainService,
        ];
        for expected in required {
            let mut draft = filled(&catalog);
            clear_field(&mut draft, &expected);
            assert_eq!(draft.to_request(&catalog), Err(expected.clone()));
            assert_eq!(draft.missing_fields(), vec![expected]);
        }
    }

    #[test]
    fn test_end_to_end_request() {
        let catalog = catalog();
        let mut draft = filled(&catalog);
        assert!(draft.toggle_add_on(&catalog, 12));
        assert_eq!(draft.quote(&catalog), PriceQuote { price: 40000, time: 4 });

        let request = draft.to_request(&catalog).unwrap();
        assert_eq!(request.turnaround, 4);
        assert_eq!(request.price, 40000);
        assert_eq!(request.additional_service_ids, vec![12]);
        assert_eq!(request.phone, "010-1234-5678");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["turnaround"], 4);
        assert_eq!(json["price"], 40000);
        assert_eq!(json["additionalServiceIds"], serde_json::json!([12]));
    }

    #[test]
    fn test_toggle_rejects_foreign_add_on() {
        let catalog = catalog();
        let mut draft = filled(&catalog);
        assert!(!draft.toggle_add_on(&catalog, 21));
        assert!(draft.additional_service_ids.is_empty());
        assert!(draft.toggle_add_on(&catalog, 12));
        assert!(draft.toggle_add_on(&catalog, 12));
        assert!(draft.additional_service_ids.is_empty());
    }

    #[test]
    fn test_changing_main_prunes_add_ons() {
        let catalog = catalog();
        let mut draft = filled(&catalog);
        draft.toggle_add_on(&catalog, 12);
        draft.select_main_service(&catalog, 2);
        assert!(draft.additional_service_ids.is_empty());
        assert_eq!(draft.quote(&catalog), PriceQuote { price: 80000, time: 6 });
    }

    #[test]
    fn test_stale_ids_never_reach_payload() {
        let catalog = catalog();
        let mut draft = filled(&catalog);
        draft.additional_service_ids.insert(21);
        let request = draft.to_request(&catalog).unwrap();
        assert!(request.additional_service_ids.is_empty());
        assert_eq!(request.price, 30000);
    }

    #[test]
    fn test_free_main_disables_submit() {
        let mut free = node(9, "서비스 선택", 0, 0, 0);
        free.children = vec![node(91, "무료 점검", 0, 1, 1)];
        let catalog = ServiceCatalog::new(vec![free]);
        let mut draft = ReservationDraft::new();
        draft.select_main_service(&catalog, 9);
        assert!(draft.is_submit_disabled(&catalog));
        assert!(!ReservationDraft::new().is_submit_disabled(&catalog));
    }

    #[test]
    fn test_initial_selection_keeps_submit_gated() {
        let mut free = node(9, "서비스 선택", 0, 0, 0);
        free.children = vec![node(91, "무료 점검", 0, 1, 1)];
        let catalog = ServiceCatalog::new(vec![node(1, "기본청소", 30000, 3, 0), free]);
        let mut draft = ReservationDraft::new();
        let initial = catalog.default_main().map(|n| n.id).unwrap();
        draft.select_main_service(&catalog, initial);
        assert!(draft.is_submit_disabled(&catalog));
        draft.select_main_service(&catalog, 1);
        assert!(!draft.is_submit_disabled(&catalog));
    }

    #[test]
    fn test_apply_profile_keeps_user_input() {
        let profile = UserProfile {
            phone: "01099998888".to_string(),
            road_address: "부산광역시 해운대구 1".to_string(),
            detail_address: "3층".to_string(),
            latitude: 35.1,
            longitude: 129.1,
        };
        let mut draft = ReservationDraft::new();
        draft.detail_address = "직접 입력".to_string();
        draft.apply_profile(&profile);
        assert_eq!(draft.phone, "010-9999-8888");
        assert_eq!(draft.road_address, "부산광역시 해운대구 1");
        assert_eq!(draft.detail_address, "직접 입력");
        assert!(draft.has_coordinates());
    }

    #[test]
    fn test_prepare_submission_checks_fields_before_schedule() {
        let catalog = catalog();
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let slots = schedule::time_slots();

        let mut draft = filled(&catalog);
        draft.request_date = "2026-10-17".to_string();
        draft.phone.clear();
        assert_eq!(
            draft.prepare_submission(&catalog, today, &slots),
            Err(DraftError::MissingPhone)
        );

        draft.set_phone("01012345678");
        assert!(matches!(
            draft.prepare_submission(&catalog, today, &slots),
            Err(DraftError::DateTooEarly { .. })
        ));

        draft.request_date = "2026-10-18".to_string();
        let request = draft.prepare_submission(&catalog, today, &slots).unwrap();
        assert_eq!(request.price, 30000);
        assert_eq!(request.turnaround, 3);
    }

    #[test]
    fn test_validate_schedule() {
        let catalog = catalog();
        let draft = filled(&catalog);
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let slots = schedule::time_slots();
        assert!(draft.validate_schedule(today, &slots).is_ok());

        let mut same_day = draft.clone();
        same_day.request_date = "2026-10-17".to_string();
        assert_eq!(
            same_day.validate_schedule(today, &slots),
            Err(DraftError::DateTooEarly {
                earliest: NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
            })
        );

        let mut late = draft;
        late.start_time = "22:00".to_string();
        assert_eq!(
            late.validate_schedule(today, &slots),
            Err(DraftError::UnavailableSlot("22:00".to_string()))
        );
    }
}
