//! PageFrame: root wrapper of every routed page.
//!
//! ```rust,ignore
//! view! {
//!     <PageFrame page_id="a004_notice--list" category=PAGE_CAT_LIST title="공지사항">
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    /// Heading rendered in `page__header`; omitted when empty
    #[prop(optional, into)]
    title: String,
    /// Buttons on the right of the heading
    #[prop(optional, into)]
    actions: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id {page_id}");

    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_STEP => "page page--step",
        PAGE_CAT_PUBLIC => "page page--public",
        _ => "page",
    };

    let header = (!title.is_empty() || actions.is_some()).then(|| {
        view! {
            <div class="page__header">
                <h1 class="page__title">{title}</h1>
                <div class="page__actions">{actions.map(|a| a.run())}</div>
            </div>
        }
    });

    view! {
        <div id=page_id class=class data-page-category=category>
            {header}
            {children()}
        </div>
    }
}
