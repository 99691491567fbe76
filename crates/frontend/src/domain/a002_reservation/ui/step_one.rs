use contracts::domain::a001_service_category::ServiceCatalog;
use contracts::domain::a002_reservation::pricing::format_won;
use contracts::domain::a002_reservation::schedule::{
    earliest_reservation_date, end_time, time_slots_between,
};
use contracts::domain::a002_reservation::ReservationDraft;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::guard::StepIndicator;
use crate::domain::a001_service_category::api::fetch_catalog;
use crate::domain::a002_reservation::api;
use crate::domain::a002_reservation::flow::{use_flow_store, FlowStep};
use crate::shared::config::config;
use crate::shared::date_utils::today;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STEP;
use crate::system::users::api::fetch_my_profile;

/// Step 1: service, address, contact and schedule
#[component]
pub fn ReservationStepOne() -> impl IntoView {
    let flow = use_flow_store();
    let navigate = use_navigate();

    let catalog = RwSignal::new(ServiceCatalog::default());
    let draft = RwSignal::new(ReservationDraft::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(true);
    let submitting = RwSignal::new(false);

    let schedule_cfg = &config().schedule;
    let slots = StoredValue::new(time_slots_between(schedule_cfg.first_hour, schedule_cfg.last_hour));
    let today = today();
    let min_date = earliest_reservation_date(today).format("%Y-%m-%d").to_string();

    spawn_local(async move {
        match fetch_catalog().await {
            Ok(c) => {
                draft.update(|d| {
                    if d.main_service_id == 0 {
                        if let Some(main) = c.default_main() {
                            d.select_main_service(&c, main.id);
                        }
                    }
                });
                catalog.set(c);
            }
            Err(e) => error.set(Some(format!("서비스 목록을 불러오지 못했습니다: {}", e))),
        }
        loading.set(false);
    });

    spawn_local(async move {
        match fetch_my_profile().await {
            Ok(profile) => draft.update(|d| d.apply_profile(&profile)),
            Err(e) => log::warn!("profile prefill skipped: {}", e),
        }
    });

    let quote = Memo::new(move |_| catalog.with(|c| draft.with(|d| d.quote(c))));
    let breakdown = Memo::new(move |_| catalog.with(|c| draft.with(|d| d.breakdown(c))));
    let main_id = Memo::new(move |_| draft.with(|d| d.main_service_id));
    let free_main = Memo::new(move |_| catalog.with(|c| draft.with(|d| d.is_submit_disabled(c))));
    let submit_disabled =
        Signal::derive(move || submitting.get() || loading.get() || free_main.get());

    let select_main = move |raw: String| {
        if let Ok(id) = raw.parse::<i64>() {
            catalog.with_untracked(|c| draft.update(|d| d.select_main_service(c, id)));
        }
    };

    let toggle_add_on = move |id: i64| {
        catalog.with_untracked(|c| {
            draft.update(|d| {
                d.toggle_add_on(c, id);
            })
        });
    };

    let submit = move || {
        let prepared = catalog.with_untracked(|c| {
            draft.with_untracked(|d| slots.with_value(|s| d.prepare_submission(c, today, s)))
        });
        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };

        error.set(None);
        submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::create_reservation(&request).await {
                Ok(created) => {
                    let mut next = String::new();
                    flow.update(|store| next = store.record_created(created));
                    submitting.set(false);
                    navigate(&next, Default::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let end_label = move || {
        draft.with(|d| {
            end_time(&d.start_time, quote.get().time)
                .map(|end| format!("{} ~ {}", d.start_time, end))
                .unwrap_or_default()
        })
    };

    view! {
        <PageFrame page_id="a002_reservation--step" category=PAGE_CAT_STEP title="서비스 예약">
            <StepIndicator current=FlowStep::Details />

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="page__content reservation-form">
                <section class="form-section">
                    <h3>"서비스 선택"</h3>
                    <div class="form-group">
                        <label for="main-service">"기본 서비스"</label>
                        <select
                            id="main-service"
                            prop:value=move || draft.with(|d| d.main_service_id.to_string())
                            on:change=move |ev| select_main(event_target_value(&ev))
                            disabled=move || loading.get()
                        >
                            {move || catalog.with(|c| {
                                c.main_services()
                                    .map(|m| {
                                        let label = if m.is_free_main() {
                                            m.name.clone()
                                        } else {
                                            format!("{} ({}, {}시간)", m.name, format_won(m.price), m.duration)
                                        };
                                        view! { <option value=m.id.to_string()>{label}</option> }
                                    })
                                    .collect_view()
                            })}
                        </select>
                    </div>

                    {move || {
                        let id = main_id.get();
                        let (included, paid) = catalog.with(|c| match c.find_main(id) {
                            Some(main) => (
                                main.included_items().map(|n| n.name.clone()).collect::<Vec<_>>(),
                                main.paid_add_ons().cloned().collect::<Vec<_>>(),
                            ),
                            None => (Vec::new(), Vec::new()),
                        });
                        view! {
                            {(!included.is_empty()).then(|| view! {
                                <div class="form-group">
                                    <label>"포함 항목"</label>
                                    <ul class="included-items">
                                        {included.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                                    </ul>
                                </div>
                            })}
                            {(!paid.is_empty()).then(|| view! {
                                <div class="form-group">
                                    <label>"추가 서비스"</label>
                                    {paid.into_iter().map(|add_on| {
                                        let id = add_on.id;
                                        view! {
                                            <label class="checkbox">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || draft.with(|d| d.additional_service_ids.contains(&id))
                                                    on:change=move |_| toggle_add_on(id)
                                                />
                                                {format!(" {} (+{}, +{}시간)", add_on.name, format_won(add_on.price), add_on.duration)}
                                            </label>
                                        }
                                    }).collect_view()}
                                </div>
                            })}
                        }
                    }}

                    <Show when=move || free_main.get()>
                        <div class="alert alert--info">"예약할 서비스를 선택해 주세요"</div>
                    </Show>
                </section>

                <section class="form-section">
                    <h3>"방문 정보"</h3>
                    <div class="form-group">
                        <label for="road-address">"도로명 주소"</label>
                        <input
                            type="text"
                            id="road-address"
                            placeholder="도로명 주소를 입력하세요"
                            prop:value=move || draft.with(|d| d.road_address.clone())
                            on:input=move |ev| draft.update(|d| d.road_address = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="detail-address">"상세 주소"</label>
                        <input
                            type="text"
                            id="detail-address"
                            placeholder="동, 호수 등"
                            prop:value=move || draft.with(|d| d.detail_address.clone())
                            on:input=move |ev| draft.update(|d| d.detail_address = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="phone">"연락처"</label>
                        <input
                            type="tel"
                            id="phone"
                            placeholder="010-0000-0000"
                            prop:value=move || draft.with(|d| d.phone.clone())
                            on:input=move |ev| draft.update(|d| d.set_phone(&event_target_value(&ev)))
                        />
                    </div>
                </section>

                <section class="form-section">
                    <h3>"일정"</h3>
                    <div class="form-group">
                        <label for="request-date">"예약 날짜"</label>
                        <input
                            type="date"
                            id="request-date"
                            min=min_date
                            prop:value=move || draft.with(|d| d.request_date.clone())
                            on:change=move |ev| draft.update(|d| d.request_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="start-time">"시작 시간"</label>
                        <select
                            id="start-time"
                            prop:value=move || draft.with(|d| d.start_time.clone())
                            on:change=move |ev| draft.update(|d| d.start_time = event_target_value(&ev))
                        >
                            <option value="">"선택하세요"</option>
                            {slots.with_value(|s| {
                                s.iter()
                                    .map(|slot| view! { <option value=slot.clone()>{slot.clone()}</option> })
                                    .collect_view()
                            })}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="memo">"요청 사항"</label>
                        <textarea
                            id="memo"
                            rows="3"
                            prop:value=move || draft.with(|d| d.memo.clone())
                            on:input=move |ev| draft.update(|d| d.memo = event_target_value(&ev))
                        ></textarea>
                    </div>
                </section>

                <aside class="price-summary">
                    <div class="price-summary__row">
                        <span>"기본 요금"</span>
                        <span>{move || format_won(breakdown.get().main)}</span>
                    </div>
                    <div class="price-summary__row">
                        <span>"추가 요금"</span>
                        <span>{move || format_won(breakdown.get().extras)}</span>
                    </div>
                    <div class="price-summary__row price-summary__row--total">
                        <span>"총 금액"</span>
                        <span>{move || format_won(quote.get().price)}</span>
                    </div>
                    <div class="price-summary__row">
                        <span>"예상 소요 시간"</span>
                        <span>{move || format!("{}시간", quote.get().time)}</span>
                    </div>
                    <div class="price-summary__row">
                        <span>"작업 시간"</span>
                        <span>{end_label}</span>
                    </div>
                    <button
                        class="button button--primary"
                        on:click=move |_| submit()
                        disabled=move || submit_disabled.get()
                    >
                        {move || if submitting.get() { "예약 중..." } else { "다음 단계" }}
                    </button>
                </aside>
            </div>
        </PageFrame>
    }
}
