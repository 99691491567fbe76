use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_params_map;

use crate::domain::a002_reservation::flow::{use_flow_store, FlowStep, GuardOutcome};

/// Renders a later workflow step only when the flow store carries its input;
/// otherwise sends the user back to the first step without rendering it
#[component]
pub fn StepGuard(step: FlowStep, children: ChildrenFn) -> impl IntoView {
    let store = use_flow_store();
    let params = use_params_map();

    // Only a changed outcome re-renders the step
    let outcome = Memo::new(move |_| {
        let id = params.read().get("id");
        store.with(|s| s.guard(step, id.as_deref()))
    });

    move || match outcome.get() {
        GuardOutcome::Render => children().into_any(),
        GuardOutcome::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
    }
}

/// Route id of the current step page; guarded routes always carry a valid one
pub fn use_reservation_id() -> Signal<i64> {
    let params = use_params_map();
    Signal::derive(move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    })
}

/// "1 예약 정보 > 2 매니저 선택 > 3 예약 완료"
#[component]
pub fn StepIndicator(current: FlowStep) -> impl IntoView {
    let steps = [FlowStep::Details, FlowStep::ManagerSelection, FlowStep::Summary];
    view! {
        <ol class="step-indicator">
            {steps.into_iter().map(|step| view! {
                <li
                    class="step-indicator__item"
                    class:step-indicator__item--active=step == current
                    class:step-indicator__item--done=step.number() < current.number()
                >
                    <span class="step-indicator__number">{step.number()}</span>
                    <span class="step-indicator__label">{step.label()}</span>
                </li>
            }).collect_view()}
        </ol>
    }
}
