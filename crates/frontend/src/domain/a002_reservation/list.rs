//! Reservation tables: the customer's own, the manager's assigned and the admin view

use contracts::domain::a002_reservation::pricing::format_won;
use contracts::domain::a002_reservation::{ReservationStatus, ReservationSummary};
use contracts::system::policy::Target;
use leptos::prelude::*;

use crate::shared::date_utils::format_schedule;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::{status_badge, FetchMode, ListResource};

impl Searchable for ReservationSummary {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.service_name, keyword)
            || contains_ci(&self.customer_name, keyword)
            || self
                .manager_name
                .as_deref()
                .map(|m| contains_ci(m, keyword))
                .unwrap_or(false)
            || self.id.to_string() == keyword
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn filter_date(&self) -> Option<&str> {
        Some(&self.request_date)
    }
}

pub fn status_tone(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Pending => "neutral",
        ReservationStatus::Matched | ReservationStatus::Confirmed => "info",
        ReservationStatus::InProgress => "warning",
        ReservationStatus::Completed => "success",
        ReservationStatus::Cancelled => "error",
    }
}

fn status_cell(status: ReservationStatus) -> AnyView {
    status_badge(status.label(), status_tone(status))
}

fn all_status_options() -> Vec<(&'static str, &'static str)> {
    ReservationStatus::ALL
        .into_iter()
        .map(|s| (s.code(), s.label()))
        .collect()
}

fn reservation_target(row: &ReservationSummary) -> Target<'_> {
    Target::Reservation {
        customer_id: row.customer_id,
        manager_id: row.manager_id,
        status: row.status,
        reviewed: row.reviewed,
    }
}

fn manager_cell(row: &ReservationSummary) -> AnyView {
    row.manager_name
        .clone()
        .unwrap_or_else(|| "미배정".to_string())
        .into_any()
}

/// Customer's own reservations, paged in the browser
pub struct MyReservations;

impl ListResource for MyReservations {
    type Row = ReservationSummary;

    const ENDPOINT: &'static str = "/api/reservations/me";
    const MODE: FetchMode = FetchMode::Local;
    const DATE_FILTER: bool = true;
    const DELETABLE: bool = false;

    fn columns() -> Vec<&'static str> {
        vec!["예약번호", "서비스", "일정", "매니저", "금액", "상태"]
    }

    fn cells(row: &ReservationSummary) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            row.service_name.clone().into_any(),
            format_schedule(&row.request_date, &row.start_time).into_any(),
            manager_cell(row),
            format_won(row.price).into_any(),
            status_cell(row.status),
        ]
    }

    fn row_id(row: &ReservationSummary) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        all_status_options()
    }

    fn target(row: &ReservationSummary) -> Target<'_> {
        reservation_target(row)
    }
}

/// Reservations assigned to the signed-in manager
pub struct AssignedReservations;

impl ListResource for AssignedReservations {
    type Row = ReservationSummary;

    const ENDPOINT: &'static str = "/api/manager/reservations";
    const MODE: FetchMode = FetchMode::Local;
    const DATE_FILTER: bool = true;
    const DELETABLE: bool = false;

    fn columns() -> Vec<&'static str> {
        vec!["예약번호", "고객", "서비스", "일정", "상태"]
    }

    fn cells(row: &ReservationSummary) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            row.customer_name.clone().into_any(),
            row.service_name.clone().into_any(),
            format_schedule(&row.request_date, &row.start_time).into_any(),
            status_cell(row.status),
        ]
    }

    fn row_id(row: &ReservationSummary) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        all_status_options()
    }

    fn target(row: &ReservationSummary) -> Target<'_> {
        reservation_target(row)
    }
}

/// Every reservation, paged by the backend
pub struct AdminReservations;

impl ListResource for AdminReservations {
    type Row = ReservationSummary;

    const ENDPOINT: &'static str = "/api/admin/reservations";
    const DATE_FILTER: bool = true;

    fn columns() -> Vec<&'static str> {
        vec!["예약번호", "고객", "매니저", "서비스", "일정", "금액", "상태"]
    }

    fn cells(row: &ReservationSummary) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            row.customer_name.clone().into_any(),
            manager_cell(row),
            row.service_name.clone().into_any(),
            format_schedule(&row.request_date, &row.start_time).into_any(),
            format_won(row.price).into_any(),
            status_cell(row.status),
        ]
    }

    fn row_id(row: &ReservationSummary) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        all_status_options()
    }

    fn target(row: &ReservationSummary) -> Target<'_> {
        reservation_target(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page::ListQuery;

    use crate::shared::list_utils::query_local;

    fn row(id: i64, service: &str, status: ReservationStatus, date: &str) -> ReservationSummary {
        ReservationSummary {
            id,
            customer_id: 5,
            customer_name: "홍길동".to_string(),
            manager_id: None,
            manager_name: None,
            service_name: service.to_string(),
            request_date: date.to_string(),
            start_time: "09:00".to_string(),
            status,
            price: 30000,
            reviewed: false,
        }
    }

    #[test]
    fn test_my_reservations_filter_locally() {
        let rows = vec![
            row(1, "기본청소", ReservationStatus::Pending, "2026-10-18"),
            row(2, "이사청소", ReservationStatus::Completed, "2026-10-20"),
            row(3, "기본청소", ReservationStatus::Cancelled, "2026-11-02"),
        ];
        let query = ListQuery {
            keyword: "기본".to_string(),
            status: vec!["PENDING".to_string()],
            ..ListQuery::new(10)
        };
        let page = query_local(rows.clone(), &query);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, 1);

        let by_id = ListQuery {
            keyword: "2".to_string(),
            ..ListQuery::new(10)
        };
        assert_eq!(query_local(rows, &by_id).content[0].id, 2);
    }

    #[test]
    fn test_reservation_target_carries_ownership() {
        let mut r = row(1, "기본청소", ReservationStatus::Completed, "2026-10-18");
        r.manager_id = Some(7);
        r.reviewed = true;
        assert_eq!(
            MyReservations::target(&r),
            Target::Reservation {
                customer_id: 5,
                manager_id: Some(7),
                status: ReservationStatus::Completed,
                reviewed: true,
            }
        );
    }
}
