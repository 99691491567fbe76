use contracts::domain::a002_reservation::{
    ConfirmReservationRequest, CreateReservationRequest, InvalidTransition, ManagerCandidate,
    ReservationConfirmation, ReservationCreated, ReservationStatus, StatusChangeRequest,
    UpdateReservationDto,
};
use contracts::domain::a007_review::CreateReviewDto;

use crate::shared::api_utils::{get_json, post_json, post_unit, put_json, ApiError};

pub async fn create_reservation(
    request: &CreateReservationRequest,
) -> Result<ReservationCreated, ApiError> {
    post_json("/api/reservations", request).await
}

pub async fn fetch_manager_candidates(reservation_id: i64) -> Result<Vec<ManagerCandidate>, ApiError> {
    get_json(&format!("/api/reservations/{}/managers", reservation_id)).await
}

pub async fn confirm_reservation(
    reservation_id: i64,
    request: &ConfirmReservationRequest,
) -> Result<ReservationConfirmation, ApiError> {
    post_json(&format!("/api/reservations/{}/confirm", reservation_id), request).await
}

/// Body of a status change; transitions outside the status machine never leave the browser
fn status_change(
    current: ReservationStatus,
    next: ReservationStatus,
) -> Result<StatusChangeRequest, InvalidTransition> {
    current.transition(next).map(|status| StatusChangeRequest { status })
}

pub async fn cancel_reservation(
    reservation_id: i64,
    current: ReservationStatus,
) -> Result<(), ApiError> {
    let body = status_change(current, ReservationStatus::Cancelled)?;
    post_unit(&format!("/api/reservations/{}/cancel", reservation_id), &body).await
}

pub async fn write_review(dto: &CreateReviewDto) -> Result<(), ApiError> {
    post_unit("/api/reviews", dto).await
}

pub async fn change_status(
    reservation_id: i64,
    current: ReservationStatus,
    next: ReservationStatus,
) -> Result<(), ApiError> {
    let body = status_change(current, next)?;
    post_unit(
        &format!("/api/manager/reservations/{}/status", reservation_id),
        &body,
    )
    .await
}

pub async fn update_reservation(dto: &UpdateReservationDto) -> Result<(), ApiError> {
    put_json(&format!("/api/admin/reservations/{}", dto.id), dto).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReservationStatus::*;

    #[test]
    fn test_cancel_body_follows_machine() {
        assert_eq!(
            status_change(Pending, Cancelled),
            Ok(StatusChangeRequest { status: Cancelled })
        );
        assert_eq!(
            status_change(InProgress, Cancelled),
            Err(InvalidTransition { from: InProgress, to: Cancelled })
        );
        assert!(status_change(Cancelled, Cancelled).is_err());
        assert!(status_change(Completed, Cancelled).is_err());
    }

    #[test]
    fn test_manager_body_follows_machine() {
        assert!(status_change(Confirmed, InProgress).is_ok());
        assert!(status_change(Confirmed, Completed).is_err());
    }
}
