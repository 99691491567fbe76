//! Searchable, paginated admin table shared by every resource page.
//!
//! A page declares a [`ListResource`], creates a [`ListState`] for it and
//! renders [`ResourceList`]; filter bar, paging, stale-response handling,
//! delete confirmation and policy gating of the row buttons come from here.

pub mod state;

pub use state::{FetchMode, ListResource, ListState};

use contracts::system::policy::{Action, Decision, DenyReason};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::system::auth::context::{use_auth, AuthState};

/// Evaluates `action` on `row` for the signed-in user; no user means deny
pub fn decide<R: ListResource>(auth: AuthState, action: Action, row: &R::Row) -> Decision {
    let policy = config().policy.to_policy();
    auth.user.with(|user| match user {
        Some(actor) => R::decide(&policy, actor, action, row),
        None => Decision::Deny(DenyReason::Forbidden),
    })
}

#[component]
fn ListFilterBar<R: ListResource>(state: ListState<R>, placeholder: String) -> impl IntoView {
    let keyword = Signal::derive(move || state.query.with(|q| q.keyword.clone()));
    let statuses = R::status_options();
    let has_statuses = !statuses.is_empty();

    view! {
        <div class="filter-panel">
            <div class="filter-panel-content">
                <SearchInput
                    value=keyword
                    on_change=Callback::new(move |value: String| state.set_keyword(value))
                    placeholder=placeholder
                />
                {has_statuses.then(|| view! {
                    <div class="filter-chips">
                        {statuses.into_iter().map(|(code, label)| {
                            let active = move || state.query.with(|q| q.status_allowed(code) && !q.status.is_empty());
                            view! {
                                <button
                                    class="chip"
                                    class:chip--active=active
                                    on:click=move |_| state.toggle_status(code)
                                >
                                    {label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })}
                {R::DATE_FILTER.then(|| view! {
                    <div class="filter-dates">
                        <input
                            type="date"
                            prop:value=move || state.query.with(|q| q.date_from.clone().unwrap_or_default())
                            on:change=move |ev| state.set_date_from(event_target_value(&ev))
                        />
                        <span>"~"</span>
                        <input
                            type="date"
                            prop:value=move || state.query.with(|q| q.date_to.clone().unwrap_or_default())
                            on:change=move |ev| state.set_date_to(event_target_value(&ev))
                        />
                    </div>
                })}
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| state.reset_filters()
                    disabled=Signal::derive(move || !state.query.with(|q| q.has_filters()))
                >
                    "초기화"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| state.load()
                    disabled=Signal::derive(move || state.loading.get())
                    attr:title="새로고침"
                >
                    {icon("refresh")}
                </Button>
            </div>
        </div>
    }
}

/// Generic table: filter bar, rows with edit/delete buttons and pagination.
/// Loads the first page on mount.
#[component]
pub fn ResourceList<R: ListResource>(
    state: ListState<R>,
    /// Opens the edit form for a row; no edit button when absent
    #[prop(optional)]
    on_edit: Option<Callback<R::Row>>,
    /// Extra buttons rendered before edit/delete
    #[prop(optional)]
    row_actions: Option<Callback<R::Row, AnyView>>,
    #[prop(optional, into)] search_placeholder: String,
    #[prop(optional, into)] empty_text: String,
) -> impl IntoView {
    let empty_text = if empty_text.is_empty() {
        "조회된 항목이 없습니다".to_string()
    } else {
        empty_text
    };
    let columns = R::columns();
    let has_actions = on_edit.is_some() || row_actions.is_some() || R::DELETABLE;
    let auth = use_auth();

    state.load();

    let render_actions = move |row: R::Row| {
        let extra = row_actions.map(|cb| cb.run(row.clone()));

        let edit = on_edit.map(|cb| {
            let decision = decide::<R>(auth, Action::Edit, &row);
            let title = match decision {
                Decision::Allow => "수정".to_string(),
                Decision::Deny(reason) => reason.to_string(),
            };
            let row = row.clone();
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| cb.run(row.clone())
                    disabled=!decision.is_allowed()
                    attr:title=title
                >
                    {icon("edit")}
                </Button>
            }
        });

        let delete = R::DELETABLE.then(|| {
            let decision = decide::<R>(auth, Action::Delete, &row);
            let title = match decision {
                Decision::Allow => "삭제".to_string(),
                Decision::Deny(reason) => reason.to_string(),
            };
            view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| state.delete_row(&row, "정말 삭제하시겠습니까?")
                    disabled=!decision.is_allowed()
                    attr:title=title
                >
                    {icon("trash")}
                </Button>
            }
        });

        view! { <div class="row-actions">{extra}{edit}{delete}</div> }
    };

    let column_count = columns.len() + usize::from(has_actions);

    view! {
        <div class="resource-list">
            {move || state.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <ListFilterBar state=state placeholder=search_placeholder />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {columns.into_iter().map(|c| view! {
                                <TableHeaderCell resizable=false>{c}</TableHeaderCell>
                            }).collect_view()}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false>"관리"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let rows = state.page.with(|p| p.content.clone());
                            if rows.is_empty() {
                                let text = if state.loading.get() { "불러오는 중...".to_string() } else { empty_text.clone() };
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count.to_string()>
                                            <div class="table__empty">{text}</div>
                                        </TableCell>
                                    </TableRow>
                                }.into_any();
                            }
                            rows.into_iter().map(|row| {
                                let cells = R::cells(&row);
                                let actions = has_actions.then(|| render_actions(row.clone()));
                                view! {
                                    <TableRow>
                                        {cells.into_iter().map(|cell| view! {
                                            <TableCell><TableCellLayout truncate=true>{cell}</TableCellLayout></TableCell>
                                        }).collect_view()}
                                        {actions.map(|a| view! { <TableCell>{a}</TableCell> })}
                                    </TableRow>
                                }
                            }).collect_view().into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || state.page.with(|p| p.page.number))
                total_pages=Signal::derive(move || state.page.with(|p| p.page.total_pages))
                total_count=Signal::derive(move || state.page.with(|p| p.page.total_elements))
                on_page_change=Callback::new(move |page: usize| state.go_to_page(page))
            />
        </div>
    }
}

/// Status label rendered as a coloured pill
pub fn status_badge(label: &'static str, tone: &'static str) -> AnyView {
    view! { <span class=format!("badge badge--{}", tone)>{label}</span> }.into_any()
}
