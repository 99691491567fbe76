use contracts::domain::a002_reservation::{ReservationStatus, ReservationSummary};
use contracts::system::policy::Action;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_reservation::api;
use crate::domain::a002_reservation::list::AssignedReservations;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{decide, ListState, ResourceList};
use crate::system::auth::context::use_auth;

/// Manager: assigned work with start/complete buttons
#[component]
pub fn AssignedReservationList() -> impl IntoView {
    let state = ListState::<AssignedReservations>::new();
    let auth = use_auth();

    let advance = move |row: ReservationSummary, next: ReservationStatus| {
        spawn_local(async move {
            match api::change_status(row.id, row.status, next).await {
                Ok(()) => {
                    log::info!("reservation #{} -> {}", row.id, next.code());
                    state.load();
                }
                Err(e) => state.error.set(Some(format!("상태를 변경하지 못했습니다: {}", e))),
            }
        });
    };

    let row_actions = Callback::new(move |row: ReservationSummary| {
        let step = [
            (Action::Start, ReservationStatus::InProgress, "작업 시작"),
            (Action::Complete, ReservationStatus::Completed, "작업 완료"),
        ]
        .into_iter()
        .find(|(action, _, _)| decide::<AssignedReservations>(auth, *action, &row).is_allowed());

        match step {
            Some((_, next, label)) => view! {
                <button class="button button--small button--primary" on:click=move |_| advance(row.clone(), next)>
                    {label}
                </button>
            }
            .into_any(),
            None => ().into_any(),
        }
    });

    view! {
        <PageFrame page_id="a002_reservation--list" category=PAGE_CAT_LIST title="배정된 예약">
            <div class="page__content">
                <ResourceList
                    state=state
                    row_actions=row_actions
                    search_placeholder="서비스명, 고객명, 예약번호"
                    empty_text="배정된 예약이 없습니다"
                />
            </div>
        </PageFrame>
    }
}
