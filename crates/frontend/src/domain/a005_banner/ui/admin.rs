use contracts::domain::a005_banner::{Banner, BannerDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_banner::api;
use crate::domain::a005_banner::list::AdminBanners;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
fn BannerForm(dto: BannerDto, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let id = dto.id;
    let title = RwSignal::new(dto.title);
    let image_url = RwSignal::new(dto.image_url);
    let link_url = RwSignal::new(dto.link_url.unwrap_or_default());
    let start_date = RwSignal::new(dto.start_date);
    let end_date = RwSignal::new(dto.end_date);
    let active = RwSignal::new(dto.active);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let link = link_url.get_untracked().trim().to_string();
        let dto = BannerDto {
            id,
            title: title.get_untracked().trim().to_string(),
            image_url: image_url.get_untracked().trim().to_string(),
            link_url: (!link.is_empty()).then_some(link),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
            active: active.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::save_banner(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            saving.set(false);
        });
    };

    view! {
        <Modal
            title=if id.is_some() { "배너 수정" } else { "배너 등록" }
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
                <label for="banner-title">"제목"</label>
                <input
                    type="text"
                    id="banner-title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="banner-image">"이미지 URL"</label>
                <input
                    type="url"
                    id="banner-image"
                    prop:value=move || image_url.get()
                    on:input=move |ev| image_url.set(event_target_value(&ev))
                />
                <Show when=move || image_url.with(|u| !u.trim().is_empty())>
                    <img class="banner-preview" src=move || image_url.get() alt="미리보기" />
                </Show>
            </div>
            <div class="form-group">
                <label for="banner-link">"링크 URL"</label>
                <input
                    type="url"
                    id="banner-link"
                    placeholder="선택 사항"
                    prop:value=move || link_url.get()
                    on:input=move |ev| link_url.set(event_target_value(&ev))
                />
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="banner-start">"게시 시작일"</label>
                    <input
                        type="date"
                        id="banner-start"
                        prop:value=move || start_date.get()
                        on:change=move |ev| start_date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="banner-end">"게시 종료일"</label>
                    <input
                        type="date"
                        id="banner-end"
                        prop:value=move || end_date.get()
                        on:change=move |ev| end_date.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || active.get()
                    on:change=move |ev| active.set(event_target_checked(&ev))
                />
                " 게시"
            </label>
        </Modal>
    }
}

#[component]
pub fn BannerList() -> impl IntoView {
    let state = ListState::<AdminBanners>::new();
    let form = RwSignal::new(None::<BannerDto>);

    view! {
        <PageFrame
            page_id="a005_banner--list"
            category=PAGE_CAT_LIST
            title="배너 관리"
            actions=move || view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| form.set(Some(BannerDto::default()))>
                    {icon("plus")}
                    " 배너 등록"
                </Button>
            }
        >
            <div class="page__content">
                <ResourceList
                    state=state
                    on_edit=Callback::new(move |row: Banner| form.set(Some(BannerDto::from_banner(&row))))
                    search_placeholder="제목, 링크"
                />
            </div>
            {move || form.get().map(|dto| view! {
                <BannerForm
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
