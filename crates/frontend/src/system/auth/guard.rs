use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;

#[component]
fn SessionPending() -> impl IntoView {
    view! { <div class="page__loading">"로그인 정보를 확인하는 중..."</div> }
}

/// Renders children for a signed-in user, otherwise redirects to the login page
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || {
        if !auth.ready.get() {
            view! { <SessionPending /> }.into_any()
        } else if auth.is_authenticated() {
            children().into_any()
        } else {
            view! { <Redirect path="/login" /> }.into_any()
        }
    }
}

/// Like [`RequireAuth`] but the user must also hold `role`
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || {
        if !auth.ready.get() {
            view! { <SessionPending /> }.into_any()
        } else if !auth.is_authenticated() {
            view! { <Redirect path="/login" /> }.into_any()
        } else if auth.has_role(role) {
            children().into_any()
        } else {
            view! {
                <div class="alert alert--error">
                    {format!("{} 전용 메뉴입니다. 접근 권한이 없습니다.", role.label())}
                </div>
            }
            .into_any()
        }
    }
}
