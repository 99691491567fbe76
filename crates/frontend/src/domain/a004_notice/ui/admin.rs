use contracts::domain::a004_notice::{Notice, NoticeDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_notice::api;
use crate::domain::a004_notice::list::AdminNotices;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
fn NoticeForm(dto: NoticeDto, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let id = dto.id;
    let title = RwSignal::new(dto.title);
    let content = RwSignal::new(dto.content);
    let pinned = RwSignal::new(dto.pinned);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let dto = NoticeDto {
            id,
            title: title.get_untracked().trim().to_string(),
            content: content.get_untracked(),
            pinned: pinned.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::save_notice(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=if id.is_some() { "공지 수정" } else { "공지 등록" }
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
                <label for="notice-title">"제목"</label>
                <input
                    type="text"
                    id="notice-title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="notice-content">"내용"</label>
                <textarea
                    id="notice-content"
                    rows="10"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </div>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || pinned.get()
                    on:change=move |ev| pinned.set(event_target_checked(&ev))
                />
                " 상단 고정"
            </label>
        </Modal>
    }
}

#[component]
pub fn NoticeList() -> impl IntoView {
    let state = ListState::<AdminNotices>::new();
    let form = RwSignal::new(None::<NoticeDto>);

    view! {
        <PageFrame
            page_id="a004_notice--list"
            category=PAGE_CAT_LIST
            title="공지사항 관리"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| form.set(Some(NoticeDto::default()))>
                    {icon("plus")}
                    " 공지 등록"
                </Button>
            }
        >
            <div class="page__content">
                <ResourceList
                    state=state
                    on_edit=Callback::new(move |row: Notice| form.set(Some(NoticeDto::from_notice(&row))))
                    search_placeholder="제목, 내용"
                />
            </div>
            {move || form.get().map(|dto| view! {
                <NoticeForm
                    dto=dto
                    on_close=Callback::new(move |_| form.set(None))
                    on_saved=Callback::new(move |_| {
                        form.set(None);
                        state.load();
                    })
                />
            })}
        </PageFrame>
    }
}
