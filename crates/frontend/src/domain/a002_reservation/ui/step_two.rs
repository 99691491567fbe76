use contracts::domain::a002_reservation::pricing::format_won;
use contracts::domain::a002_reservation::{
    ConfirmReservationRequest, ManagerCandidate, PaymentMethod, ReservationCreated,
};
use contracts::domain::a007_review::stars;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::guard::{use_reservation_id, StepIndicator};
use crate::domain::a002_reservation::api;
use crate::domain::a002_reservation::flow::{use_flow_store, FlowStep};
use crate::shared::date_utils::format_schedule;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STEP;

#[component]
fn CreatedSummary(created: ReservationCreated) -> impl IntoView {
    let extras = if created.additional_service_names.is_empty() {
        "없음".to_string()
    } else {
        created.additional_service_names.join(", ")
    };
    view! {
        <dl class="summary-list">
            <dt>"서비스"</dt>
            <dd>{created.main_service_name.clone()}</dd>
            <dt>"추가 서비스"</dt>
            <dd>{extras}</dd>
            <dt>"일정"</dt>
            <dd>{format!("{} ({}시간)", format_schedule(&created.request_date, &created.start_time), created.turnaround)}</dd>
            <dt>"주소"</dt>
            <dd>{format!("{} {}", created.road_address, created.detail_address)}</dd>
            <dt>"금액"</dt>
            <dd>{format_won(created.price)}</dd>
        </dl>
    }
}

#[component]
fn CandidateCard(candidate: ManagerCandidate, selected: RwSignal<Option<i64>>) -> impl IntoView {
    let id = candidate.manager_id;
    let is_selected = move || selected.get() == Some(id);
    view! {
        <div
            class="manager-card"
            class:manager-card--selected=is_selected
            on:click=move |_| selected.set(Some(id))
        >
            {candidate.profile_image_url.clone().map(|url| view! {
                <img class="manager-card__photo" src=url alt=candidate.name.clone() />
            })}
            <div class="manager-card__body">
                <div class="manager-card__name">{candidate.name.clone()}</div>
                <div class="manager-card__rating">
                    {stars(candidate.rating.round().clamp(0.0, 5.0) as u8)}
                    {format!(" {:.1} (리뷰 {}개)", candidate.rating, candidate.review_count)}
                </div>
                {candidate.introduction.clone().map(|intro| view! {
                    <p class="manager-card__intro">{intro}</p>
                })}
            </div>
        </div>
    }
}

/// Step 2: choose a manager and a payment method, then confirm
#[component]
pub fn ReservationStepTwo() -> impl IntoView {
    let flow = use_flow_store();
    let navigate = use_navigate();
    let reservation_id = use_reservation_id().get_untracked();
    let created = flow.with_untracked(|s| s.created(reservation_id).cloned());

    let candidates = RwSignal::new(Vec::<ManagerCandidate>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let selected = RwSignal::new(None::<i64>);
    let payment = RwSignal::new(PaymentMethod::default());
    let confirming = RwSignal::new(false);

    spawn_local(async move {
        match api::fetch_manager_candidates(reservation_id).await {
            Ok(list) => candidates.set(list),
            Err(e) => error.set(Some(format!("매니저 목록을 불러오지 못했습니다: {}", e))),
        }
        loading.set(false);
    });

    let confirm = move || {
        let Some(manager_id) = selected.get_untracked() else {
            error.set(Some("매니저를 선택해 주세요".to_string()));
            return;
        };
        let request = ConfirmReservationRequest {
            manager_id,
            payment_method: payment.get_untracked(),
        };
        error.set(None);
        confirming.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::confirm_reservation(reservation_id, &request).await {
                Ok(confirmation) => {
                    let mut next = String::new();
                    flow.update(|store| next = store.record_confirmation(confirmation));
                    confirming.set(false);
                    navigate(&next, Default::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    confirming.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a002_reservation--step" category=PAGE_CAT_STEP title="매니저 선택">
            <StepIndicator current=FlowStep::ManagerSelection />

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="page__content">
                {created.map(|c| view! { <CreatedSummary created=c /> })}

                <section class="form-section">
                    <h3>"매니저"</h3>
                    {move || {
                        if loading.get() {
                            return view! { <div class="page__loading">"매니저를 찾는 중..."</div> }.into_any();
                        }
                        let list = candidates.get();
                        if list.is_empty() {
                            return view! {
                                <div class="alert alert--info">"지금 배정 가능한 매니저가 없습니다"</div>
                            }.into_any();
                        }
                        view! {
                            <div class="manager-grid">
                                {list.into_iter().map(|candidate| view! {
                                    <CandidateCard candidate=candidate selected=selected />
                                }).collect_view()}
                            </div>
                        }.into_any()
                    }}
                </section>

                <section class="form-section">
                    <h3>"결제 수단"</h3>
                    <div class="radio-group">
                        {PaymentMethod::ALL.into_iter().map(|method| view! {
                            <label class="radio">
                                <input
                                    type="radio"
                                    name="payment-method"
                                    prop:checked=move || payment.get() == method
                                    on:change=move |_| payment.set(method)
                                />
                                {format!(" {}", method.label())}
                            </label>
                        }).collect_view()}
                    </div>
                </section>

                <button
                    class="button button--primary"
                    on:click=move |_| confirm()
                    disabled=move || confirming.get() || selected.get().is_none()
                >
                    {move || if confirming.get() { "확정 중..." } else { "예약 확정" }}
                </button>
            </div>
        </PageFrame>
    }
}
