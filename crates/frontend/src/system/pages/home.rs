use leptos::prelude::*;
use leptos_router::components::A;

use crate::domain::a001_service_category::ui::catalog::ServiceCatalogBrowse;
use crate::domain::a004_notice::ui::board::PinnedNotices;
use crate::domain::a005_banner::ui::carousel::BannerCarousel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_PUBLIC;
use crate::system::auth::context::use_auth;

/// Landing page: banners, services on offer and pinned notices
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <PageFrame page_id="home--public" category=PAGE_CAT_PUBLIC>
            <BannerCarousel />
            <section class="home-hero">
                <h1>"집안일, 전문 매니저에게 맡기세요"</h1>
                <p>"원하는 날짜와 시간에 검증된 매니저가 방문합니다."</p>
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! { <A href="/login" attr:class="button button--primary">"로그인하고 예약하기"</A> }.into_any()
                >
                    <A href="/reservations/new" attr:class="button button--primary">"지금 예약하기"</A>
                </Show>
            </section>
            <ServiceCatalogBrowse />
            <PinnedNotices />
        </PageFrame>
    }
}
