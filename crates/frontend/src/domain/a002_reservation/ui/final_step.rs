use contracts::domain::a002_reservation::pricing::format_won;
use leptos::prelude::*;
use leptos_router::components::A;

use super::guard::{use_reservation_id, StepIndicator};
use crate::domain::a002_reservation::flow::{use_flow_store, FlowStep};
use crate::shared::date_utils::format_schedule;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STEP;

/// Step 3: read-only summary of the confirmed reservation
#[component]
pub fn ReservationComplete() -> impl IntoView {
    let flow = use_flow_store();
    let reservation_id = use_reservation_id().get_untracked();
    let confirmation = flow.with_untracked(|s| s.confirmation(reservation_id).cloned());

    view! {
        <PageFrame page_id="a002_reservation--step" category=PAGE_CAT_STEP title="예약 완료">
            <StepIndicator current=FlowStep::Summary />
            <div class="page__content">
                {confirmation.map(|c| {
                    let extras = if c.additional_service_names.is_empty() {
                        "없음".to_string()
                    } else {
                        c.additional_service_names.join(", ")
                    };
                    view! {
                        <div class="alert alert--success">"예약이 확정되었습니다"</div>
                        <dl class="summary-list">
                            <dt>"예약 번호"</dt>
                            <dd>{c.reservation_id}</dd>
                            <dt>"서비스"</dt>
                            <dd>{c.main_service_name.clone()}</dd>
                            <dt>"추가 서비스"</dt>
                            <dd>{extras}</dd>
                            <dt>"일정"</dt>
                            <dd>{format!("{} ({}시간)", format_schedule(&c.request_date, &c.start_time), c.turnaround)}</dd>
                            <dt>"주소"</dt>
                            <dd>{format!("{} {}", c.road_address, c.detail_address)}</dd>
                            <dt>"매니저"</dt>
                            <dd>{c.manager.name.clone()}</dd>
                            <dt>"결제 수단"</dt>
                            <dd>{c.payment_method.label()}</dd>
                        </dl>
                        <div class="price-summary">
                            <div class="price-summary__row">
                                <span>"기본 요금"</span>
                                <span>{format_won(c.price.main)}</span>
                            </div>
                            <div class="price-summary__row">
                                <span>"추가 요금"</span>
                                <span>{format_won(c.price.extras)}</span>
                            </div>
                            <div class="price-summary__row price-summary__row--total">
                                <span>"총 금액"</span>
                                <span>{format_won(c.price.total)}</span>
                            </div>
                        </div>
                    }
                })}
                <div class="page__actions">
                    <A href="/reservations/me" attr:class="button button--primary">"내 예약 보기"</A>
                    <A href="/" attr:class="button button--secondary">"홈으로"</A>
                </div>
            </div>
        </PageFrame>
    }
}
