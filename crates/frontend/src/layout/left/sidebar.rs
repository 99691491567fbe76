//! Role-dependent navigation menu

use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups(role: Option<Role>) -> Vec<MenuGroup> {
    let mut groups = vec![MenuGroup {
        id: "service",
        label: "서비스",
        icon: "home",
        items: vec![("/", "홈", "home"), ("/notices", "공지사항", "bell")],
    }];

    match role {
        Some(Role::Customer) => groups.push(MenuGroup {
            id: "customer",
            label: "내 서비스",
            icon: "calendar",
            items: vec![
                ("/reservations/new", "서비스 예약", "plus"),
                ("/reservations/me", "내 예약", "calendar"),
                ("/inquiries/me", "내 문의", "message"),
            ],
        }),
        Some(Role::Manager) => groups.push(MenuGroup {
            id: "manager",
            label: "매니저",
            icon: "briefcase",
            items: vec![("/manager/reservations", "배정된 예약", "calendar")],
        }),
        Some(Role::Admin) => groups.push(MenuGroup {
            id: "admin",
            label: "관리",
            icon: "users",
            items: vec![
                ("/admin/reservations", "예약 관리", "calendar"),
                ("/admin/accounts", "계정 관리", "users"),
                ("/admin/customers", "고객 관리", "customers"),
                ("/admin/managers", "매니저 관리", "briefcase"),
                ("/admin/notices", "공지사항 관리", "bell"),
                ("/admin/banners", "배너 관리", "image"),
                ("/admin/inquiries", "문의 관리", "message"),
                ("/admin/reviews", "리뷰 관리", "star"),
            ],
        }),
        None => {}
    }
    groups
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let collapsed_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <nav class="app-sidebar__content">
            {move || {
                let role = auth.user.with(|u| u.as_ref().map(|u| u.role));
                get_menu_groups(role).into_iter().map(|group| {
                    let id = group.id;
                    let is_open = move || !collapsed_groups.with(|c| c.contains(&id));
                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| collapsed_groups.update(|c| {
                                    if let Some(pos) = c.iter().position(|g| *g == id) {
                                        c.remove(pos);
                                    } else {
                                        c.push(id);
                                    }
                                })
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_open>
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_open>
                                <div class="app-sidebar__children">
                                    {group.items.clone().into_iter().map(|(href, label, icon_name)| view! {
                                        <A href=href attr:class="app-sidebar__item">
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </A>
                                    }).collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                }).collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hrefs(role: Option<Role>) -> Vec<&'static str> {
        get_menu_groups(role)
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(href, _, _)| href))
            .collect()
    }

    #[test]
    fn test_menus_follow_role() {
        assert_eq!(hrefs(None), vec!["/", "/notices"]);
        assert!(hrefs(Some(Role::Customer)).contains(&"/reservations/me"));
        assert!(!hrefs(Some(Role::Customer)).iter().any(|h| h.starts_with("/admin")));
        assert_eq!(
            hrefs(Some(Role::Manager)).last().copied(),
            Some("/manager/reservations")
        );
        assert_eq!(
            hrefs(Some(Role::Admin)).iter().filter(|h| h.starts_with("/admin")).count(),
            8
        );
    }
}
