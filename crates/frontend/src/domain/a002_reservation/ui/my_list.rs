use contracts::domain::a002_reservation::ReservationSummary;
use contracts::domain::a007_review::CreateReviewDto;
use contracts::system::policy::Action;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a002_reservation::api;
use crate::domain::a002_reservation::list::MyReservations;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{decide, ListState, ResourceList};
use crate::system::auth::context::use_auth;

#[component]
fn ReviewForm(
    reservation: ReservationSummary,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let reservation_id = reservation.id;
    let rating = RwSignal::new(5u8);
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let dto = CreateReviewDto {
            reservation_id,
            rating: rating.get_untracked(),
            content: content.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::write_review(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=format!("리뷰 작성 - {}", reservation.service_name)
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"취소"</button>
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    "등록"
                </button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="form-group">
                <label for="review-rating">"평점"</label>
                <select
                    id="review-rating"
                    prop:value=move || rating.get().to_string()
                    on:change=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse() {
                            rating.set(v);
                        }
                    }
                >
                    {(1u8..=5).rev().map(|r| view! {
                        <option value=r.to_string()>{contracts::domain::a007_review::stars(r)}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for="review-content">"내용 (10~500자)"</label>
                <textarea
                    id="review-content"
                    rows="5"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class="form-hint">{move || format!("{}자", content.with(|c| c.chars().count()))}</div>
            </div>
        </Modal>
    }
}

/// Customer: own reservations with cancel and review
#[component]
pub fn MyReservationList() -> impl IntoView {
    let state = ListState::<MyReservations>::new();
    let auth = use_auth();
    let reviewing = RwSignal::new(None::<ReservationSummary>);

    let cancel = move |row: ReservationSummary| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("예약을 취소하시겠습니까?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::cancel_reservation(row.id, row.status).await {
                Ok(()) => state.load(),
                Err(e) => state.error.set(Some(format!("취소하지 못했습니다: {}", e))),
            }
        });
    };

    let row_actions = Callback::new(move |row: ReservationSummary| {
        let can_cancel = decide::<MyReservations>(auth, Action::Cancel, &row);
        let can_review = decide::<MyReservations>(auth, Action::WriteReview, &row);
        let for_cancel = row.clone();
        view! {
            {can_cancel.is_allowed().then(|| view! {
                <button class="button button--small button--secondary" on:click=move |_| cancel(for_cancel.clone())>
                    "취소"
                </button>
            })}
            {can_review.is_allowed().then(|| view! {
                <button class="button button--small button--primary" on:click=move |_| reviewing.set(Some(row.clone()))>
                    "리뷰 작성"
                </button>
            })}
        }
        .into_any()
    });

    view! {
        <PageFrame
            page_id="a002_reservation--list"
            category=PAGE_CAT_LIST
            title="내 예약"
            actions=|| view! {
                <A href="/reservations/new" attr:class="button button--primary">"새 예약"</A>
            }
        >
            <div class="page__content">
                <ResourceList
                    state=state
                    row_actions=row_actions
                    search_placeholder="서비스명, 매니저, 예약번호"
                    empty_text="예약 내역이 없습니다"
                />
            </div>
            {move || reviewing.get().map(|reservation| view! {
                <ReviewForm
                    reservation=reservation
                    on_close=Callback::new(move |_| reviewing.set(None))
                    on_saved=Callback::new(move |_| {
                        reviewing.set(None);
                        state.load();
                    })
                />
            })}
        </PageFrame>
    }
}
