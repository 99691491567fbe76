use leptos::prelude::*;

use crate::domain::a008_customer::list::AdminCustomers;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_list::{ListState, ResourceList};

#[component]
pub fn CustomerList() -> impl IntoView {
    let state = ListState::<AdminCustomers>::new();

    view! {
        <PageFrame page_id="a008_customer--list" category=PAGE_CAT_LIST title="고객 관리">
            <div class="page__content">
                <ResourceList state=state search_placeholder="이름, 연락처, 이메일" />
            </div>
        </PageFrame>
    }
}
