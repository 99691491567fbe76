use serde::{Deserialize, Serialize};

use super::aggregate::PaymentMethod;
use super::pricing::PriceBreakdown;

/// Body of `POST /api/reservations`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub main_service_id: i64,
    pub additional_service_ids: Vec<i64>,
    pub phone: String,
    pub road_address: String,
    pub detail_address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub request_date: String,
    pub start_time: String,
    #[serde(default)]
    pub memo: String,
    pub turnaround: u32,
    pub price: u64,
}

/// Response of the create call, carried into step 2
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreated {
    #[serde(alias = "id")]
    pub reservation_id: i64,
    #[serde(default)]
    pub main_service_name: String,
    #[serde(default)]
    pub additional_service_names: Vec<String>,
    pub request_date: String,
    pub start_time: String,
    pub road_address: String,
    #[serde(default)]
    pub detail_address: String,
    pub price: u64,
    pub turnaround: u32,
    #[serde(default)]
    pub memo: String,
}

/// Manager offered for a reservation in step 2
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ManagerCandidate {
    pub manager_id: i64,
    pub name: String,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub introduction: Option<String>,
}

/// Body of `POST /api/reservations/{id}/confirm`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmReservationRequest {
    pub manager_id: i64,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManagerIdentity {
    pub manager_id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Final-step payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationConfirmation {
    pub reservation_id: i64,
    pub main_service_name: String,
    #[serde(default)]
    pub additional_service_names: Vec<String>,
    pub request_date: String,
    pub start_time: String,
    pub turnaround: u32,
    pub road_address: String,
    #[serde(default)]
    pub detail_address: String,
    pub manager: ManagerIdentity,
    pub price: PriceBreakdown,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_accepts_plain_id() {
        let raw = r#"{"id":42,"requestDate":"2026-10-18","startTime":"09:00",
            "roadAddress":"서울시 강남구 테헤란로 1","price":40000,"turnaround":4}"#;
        let created: ReservationCreated = serde_json::from_str(raw).unwrap();
        assert_eq!(created.reservation_id, 42);
        assert!(created.additional_service_names.is_empty());
    }

    #[test]
    fn test_confirm_request_wire_shape() {
        let body = ConfirmReservationRequest {
            manager_id: 7,
            payment_method: PaymentMethod::OnSite,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"managerId": 7, "paymentMethod": "ON_SITE"})
        );
    }
}
