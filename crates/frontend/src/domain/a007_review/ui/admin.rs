use leptos::prelude::*;

use crate::domain::a007_review::list::AdminReviews;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
pub fn ReviewList() -> impl IntoView {
    let state = ListState::<AdminReviews>::new();

    view! {
        <PageFrame page_id="a007_review--list" category=PAGE_CAT_LIST title="리뷰 관리">
            <div class="page__content">
                <ResourceList state=state search_placeholder="내용, 작성자, 매니저" />
            </div>
        </PageFrame>
    }
}
