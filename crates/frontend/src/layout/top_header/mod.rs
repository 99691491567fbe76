//! Top navigation bar: menu toggle, brand, user badge and logout

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());

    let logout = move |_| {
        spawn_local(async move {
            auth.logout().await;
            navigate.with_value(|nav| nav("/login", Default::default()));
        });
    };

    let user_label = move || {
        auth.user.with(|u| {
            u.as_ref()
                .map(|u| format!("{} ({})", u.name, u.role.label()))
                .unwrap_or_default()
        })
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "메뉴 닫기" } else { "메뉴 열기" }
                >
                    {icon("menu")}
                </button>
                <A href="/" attr:class="top-header__title">"홈케어"</A>
            </div>

            <div class="top-header__actions">
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! {
                        <A href="/login" attr:class="button button--primary">"로그인"</A>
                    }
                >
                    <div class="top-header__user">
                        {icon("user")}
                        <span>{user_label}</span>
                    </div>
                    <button class="top-header__icon-btn" on:click=logout title="로그아웃">
                        {icon("logout")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
