use contracts::domain::a006_inquiry::{CreateInquiryDto, Inquiry};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_inquiry::api;
use crate::domain::a006_inquiry::list::MyInquiries;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
fn InquiryForm(on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let dto = CreateInquiryDto {
            title: title.get_untracked().trim().to_string(),
            content: content.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::create_inquiry(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title="문의하기"
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
                <label for="inquiry-title">"제목"</label>
                <input
                    type="text"
                    id="inquiry-title"
                    maxlength="100"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="inquiry-content">"내용"</label>
                <textarea
                    id="inquiry-content"
                    rows="8"
                    maxlength="2000"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <div class="form-hint">{move || format!("{} / 2000자", content.with(|c| c.chars().count()))}</div>
            </div>
        </Modal>
    }
}

#[component]
fn InquiryDetail(inquiry: Inquiry, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=inquiry.title.clone() on_close=on_close>
            <div class="inquiry-question">
                <div class="inquiry-question__meta">{format_datetime(&inquiry.created_at)}</div>
                <p class="inquiry-question__content">{inquiry.content.clone()}</p>
            </div>
            {match inquiry.answer.clone() {
                Some(answer) => view! {
                    <div class="inquiry-answer">
                        <h4>"답변"</h4>
                        <p>{answer}</p>
                    </div>
                }.into_any(),
                None => view! { <div class="alert alert--info">"아직 답변이 등록되지 않았습니다"</div> }.into_any(),
            }}
        </Modal>
    }
}

/// Customer: own inquiries and the new-inquiry form
#[component]
pub fn MyInquiryList() -> impl IntoView {
    let state = ListState::<MyInquiries>::new();
    let creating = RwSignal::new(false);
    let viewing = RwSignal::new(None::<Inquiry>);

    let row_actions = Callback::new(move |row: Inquiry| {
        view! {
            <button class="button button--small button--secondary" on:click=move |_| viewing.set(Some(row.clone()))>
                "보기"
            </button>
        }
        .into_any()
    });

    view! {
        <PageFrame
            page_id="a006_inquiry--list"
            category=PAGE_CAT_LIST
            title="내 문의"
            actions=move || view! {
                <button class="button button--primary" on:click=move |_| creating.set(true)>"문의하기"</button>
            }
        >
            <div class="page__content">
                <ResourceList
                    state=state
                    row_actions=row_actions
                    search_placeholder="제목, 내용"
                    empty_text="등록한 문의가 없습니다"
                />
            </div>
            <Show when=move || creating.get()>
                <InquiryForm
                    on_close=Callback::new(move |_| creating.set(false))
                    on_saved=Callback::new(move |_| {
                        creating.set(false);
                        state.load();
                    })
                />
            </Show>
            {move || viewing.get().map(|inquiry| view! {
                <InquiryDetail inquiry=inquiry on_close=Callback::new(move |_| viewing.set(None)) />
            })}
        </PageFrame>
    }
}
