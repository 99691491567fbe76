use contracts::domain::a006_inquiry::{AnswerInquiryDto, Inquiry, InquiryStatus};
use contracts::system::policy::Action;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_inquiry::api;
use crate::domain::a006_inquiry::list::AdminInquiries;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{decide, ListState, ResourceList};
use crate::system::auth::context::use_auth;

#[component]
fn AnswerForm(inquiry: Inquiry, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let id = inquiry.id;
    let answer = RwSignal::new(inquiry.answer.clone().unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let dto = AnswerInquiryDto {
            answer: answer.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::answer_inquiry(id, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=format!("문의 답변 - {}", inquiry.title)
            on_close=on_close
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>"닫기"</button>
                <button class="button button--primary" on:click=move |_| save() disabled=move || saving.get()>
                    "답변 등록"
                </button>
            }
        >
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            <div class="inquiry-question">
                <div class="inquiry-question__meta">
                    {format!("{} · {}", inquiry.author, format_datetime(&inquiry.created_at))}
                </div>
                <p class="inquiry-question__content">{inquiry.content.clone()}</p>
            </div>
            <div class="form-group">
                <label for="inquiry-answer">"답변"</label>
                <textarea
                    id="inquiry-answer"
                    rows="8"
                    prop:value=move || answer.get()
                    on:input=move |ev| answer.set(event_target_value(&ev))
                ></textarea>
            </div>
        </Modal>
    }
}

#[component]
pub fn InquiryList() -> impl IntoView {
    let state = ListState::<AdminInquiries>::new();
    let auth = use_auth();
    let answering = RwSignal::new(None::<Inquiry>);

    let row_actions = Callback::new(move |row: Inquiry| {
        if !decide::<AdminInquiries>(auth, Action::Answer, &row).is_allowed() {
            return ().into_any();
        }
        let label = match row.status {
            InquiryStatus::Pending => "답변",
            InquiryStatus::Answered => "답변 수정",
        };
        view! {
            <button class="button button--small button--primary" on:click=move |_| answering.set(Some(row.clone()))>
                {label}
            </button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a006_inquiry--list" category=PAGE_CAT_LIST title="문의 관리">
            <div class="page__content">
                <ResourceList
                    state=state
                    row_actions=row_actions
                    search_placeholder="제목, 내용, 작성자"
                />
            </div>
            {move || answering.get().map(|inquiry| view! {
                <AnswerForm
                    inquiry=inquiry
                    on_close=Callback::new(move |_| answering.set(None))
                    on_saved=Callback::new(move |_| {
                        answering.set(None);
                        state.load();
                    })
                />
            })}
        </PageFrame>
    }
}
