use contracts::domain::a004_notice::Notice;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::domain::a004_notice::api;
use crate::domain::a004_notice::list::PublicNotices;
use crate::shared::date_utils::format_date;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
fn NoticeReader(notice: Notice, on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=notice.title.clone() on_close=on_close>
            <div class="notice-meta">
                {format!("{} · {}", notice.author, format_date(&notice.created_at))}
            </div>
            <div class="notice-content">{notice.content.clone()}</div>
        </Modal>
    }
}

/// Public notice board
#[component]
pub fn NoticeBoard() -> impl IntoView {
    let state = ListState::<PublicNotices>::new();
    let reading = RwSignal::new(None::<Notice>);

    let row_actions = Callback::new(move |row: Notice| {
        view! {
            <button class="button button--small button--secondary" on:click=move |_| reading.set(Some(row.clone()))>
                "보기"
            </button>
        }
        .into_any()
    });

    view! {
        <PageFrame page_id="a004_notice--public" category=PAGE_CAT_PUBLIC title="공지사항">
            <div class="page__content">
                <ResourceList
                    state=state
                    row_actions=row_actions
                    search_placeholder="제목, 내용"
                    empty_text="등록된 공지사항이 없습니다"
                />
            </div>
            {move || reading.get().map(|notice| view! {
                <NoticeReader notice=notice on_close=Callback::new(move |_| reading.set(None)) />
            })}
        </PageFrame>
    }
}

/// Pinned notices block of the home page
#[component]
pub fn PinnedNotices(#[prop(default = 5)] limit: usize) -> impl IntoView {
    let notices = RwSignal::new(Vec::<Notice>::new());

    spawn_local(async move {
        match api::fetch_pinned_notices(limit).await {
            Ok(list) => notices.set(list),
            Err(e) => log::warn!("pinned notices unavailable: {}", e),
        }
    });

    view! {
        <Show when=move || notices.with(|n| !n.is_empty())>
            <section class="home-section">
                <div class="home-section__header">
                    <h2>"공지사항"</h2>
                    <A href="/notices" attr:class="link">"전체 보기"</A>
                </div>
                <ul class="notice-list">
                    {move || notices.get().into_iter().map(|n| view! {
                        <li class="notice-list__item">
                            <span class="notice-list__title">{n.title}</span>
                            <span class="notice-list__date">{format_date(&n.created_at)}</span>
                        </li>
                    }).collect_view()}
                </ul>
            </section>
        </Show>
    }
}
