use contracts::domain::a002_reservation::{
    ReservationStatus, ReservationSummary, UpdateReservationDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_reservation::api;
use crate::domain::a002_reservation::list::AdminReservations;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

/// Current status followed by every status it may move to
fn status_choices(current: ReservationStatus) -> Vec<ReservationStatus> {
    std::iter::once(current)
        .chain(
            ReservationStatus::ALL
                .into_iter()
                .filter(|next| current.can_transition_to(*next)),
        )
        .collect()
}

#[component]
fn ReservationEditForm(
    row: ReservationSummary,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let id = row.id;
    let current = row.status;
    let request_date = RwSignal::new(row.request_date.clone());
    let start_time = RwSignal::new(row.start_time.clone());
    let status = RwSignal::new(row.status);
    let manager_id = RwSignal::new(row.manager_id.map(|m| m.to_string()).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let manager = manager_id.get_untracked();
        let manager = manager.trim();
        let manager_id = if manager.is_empty() {
            None
        } else {
            match manager.parse::<i64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    error.set(Some("매니저 번호는 숫자여야 합니다".to_string()));
                    return;
                }
            }
        };
        let next = status.get_untracked();
        if next != current && !current.can_transition_to(next) {
            error.set(Some(format!("{}에서 {}(으)로 변경할 수 없습니다", current.label(), next.label())));
            return;
        }
        let dto = UpdateReservationDto {
            id,
            request_date: request_date.get_untracked(),
            start_time: start_time.get_untracked(),
            status: next,
            manager_id,
        };
        saving.set(true);
        spawn_local(async move {
            match api::update_reservation(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=format!("예약 #{} 수정", id)
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"취소"</button>
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    "저장"
                </button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-group">
                <label>"고객"</label>
                <div>{row.customer_name.clone()}</div>
            </div>
            <div class="form-group">
                <label for="edit-date">"예약 날짜"</label>
                <input
                    type="date"
                    id="edit-date"
                    prop:value=move || request_date.get()
                    on:change=move |ev| request_date.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-time">"시작 시간"</label>
                <input
                    type="time"
                    id="edit-time"
                    prop:value=move || start_time.get()
                    on:change=move |ev| start_time.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="edit-status">"상태"</label>
                <select
                    id="edit-status"
                    prop:value=move || status.get().code()
                    on:change=move |ev| {
                        if let Some(s) = ReservationStatus::from_code(&event_target_value(&ev)) {
                            status.set(s);
                        }
                    }
                >
                    {status_choices(current).into_iter().map(|s| view! {
                        <option value=s.code()>{s.label()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="edit-manager">"매니저 번호"</label>
                <input
                    type="text"
                    id="edit-manager"
                    placeholder="미배정"
                    prop:value=move || manager_id.get()
                    on:input=move |ev| manager_id.set(event_target_value(&ev))
                />
            </div>
        </Modal>
    }
}

/// Admin: every reservation, server-side paging
#[component]
pub fn AdminReservationList() -> impl IntoView {
    let state = ListState::<AdminReservations>::new();
    let editing = RwSignal::new(None::<ReservationSummary>);

    view! {
        <PageFrame page_id="a002_reservation--list" category=PAGE_CAT_LIST title="예약 관리">
            <div class="page__content">
                <ResourceList
                    state=state
                    on_edit=Callback::new(move |row| editing.set(Some(row)))
                    search_placeholder="서비스명, 고객명, 매니저, 예약번호"
                />
            </div>
            {move || editing.get().map(|row| view! {
                <ReservationEditForm
                    row=row
                    on_close=Callback::new(move |_| editing.set(None))
                    on_saved=Callback::new(move |_| {
                        editing.set(None);
                        state.load();
                    })
                />
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ReservationStatus::*;

    #[test]
    fn test_status_choices_follow_machine() {
        assert_eq!(status_choices(Pending), vec![Pending, Matched, Cancelled]);
        assert_eq!(status_choices(Confirmed), vec![Confirmed, InProgress, Cancelled]);
        assert_eq!(status_choices(Completed), vec![Completed]);
    }
}
