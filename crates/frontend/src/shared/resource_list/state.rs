use std::marker::PhantomData;

use contracts::shared::page::{ListQuery, Page};
use contracts::system::auth::UserInfo;
use contracts::system::policy::{evaluate, Action, Decision, PolicyConfig, Target};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::{self, ApiError};
use crate::shared::config::config;
use crate::shared::list_utils::{query_local, Searchable};
use crate::shared::state::RequestSequence;

/// Where paging and filtering happen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchMode {
    /// `GET endpoint?query` returns one `Page<T>`
    Server,
    /// `GET endpoint` returns every row; filtering and paging run in the browser
    Local,
}

/// One table-backed resource: where it lives, how rows look and who may touch them
pub trait ListResource: 'static {
    type Row: Clone + Searchable + DeserializeOwned + Send + Sync + 'static;

    const ENDPOINT: &'static str;
    const MODE: FetchMode = FetchMode::Server;
    /// Shows the date-range inputs
    const DATE_FILTER: bool = false;
    /// Shows the per-row delete button (still subject to the policy)
    const DELETABLE: bool = true;

    fn columns() -> Vec<&'static str>;

    fn cells(row: &Self::Row) -> Vec<AnyView>;

    fn row_id(row: &Self::Row) -> i64;

    /// `(code, label)` pairs offered by the status filter
    fn status_options() -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }

    fn target(_row: &Self::Row) -> Target<'_> {
        Target::AdminResource
    }

    fn decide(policy: &PolicyConfig, actor: &UserInfo, action: Action, row: &Self::Row) -> Decision {
        evaluate(policy, actor, action, Self::target(row))
    }

    fn delete_path(row: &Self::Row) -> String {
        format!("{}/{}", Self::ENDPOINT, Self::row_id(row))
    }
}

/// Reactive state of one list page; `Copy` so closures can capture it freely
pub struct ListState<R: ListResource> {
    pub query: RwSignal<ListQuery>,
    pub page: RwSignal<Page<R::Row>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    sequence: StoredValue<RequestSequence>,
    /// Every row of a [`FetchMode::Local`] resource
    cache: StoredValue<Option<Vec<R::Row>>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: ListResource> Clone for ListState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ListResource> Copy for ListState<R> {}

impl<R: ListResource> ListState<R> {
    pub fn new() -> Self {
        Self {
            query: RwSignal::new(ListQuery::new(config().list.page_size)),
            page: RwSignal::new(Page::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            sequence: StoredValue::new(RequestSequence::new()),
            cache: StoredValue::new(None),
            _resource: PhantomData,
        }
    }

    /// Fetches from the backend with the current criteria
    pub fn load(&self) {
        let state = *self;
        let query = self.query.get_untracked();
        let mut issued = 0;
        self.sequence.update_value(|seq| issued = seq.begin());
        self.loading.set(true);

        spawn_local(async move {
            let result: Result<Page<R::Row>, ApiError> = match R::MODE {
                FetchMode::Server => api_utils::get_json_with_query(R::ENDPOINT, &query).await,
                FetchMode::Local => match api_utils::get_json::<Vec<R::Row>>(R::ENDPOINT).await {
                    Ok(rows) => {
                        state.cache.set_value(Some(rows.clone()));
                        Ok(query_local(rows, &query))
                    }
                    Err(e) => Err(e),
                },
            };

            if !state.sequence.with_value(|seq| seq.is_current(issued)) {
                log::debug!("{}: dropping stale response #{}", R::ENDPOINT, issued);
                return;
            }
            match result {
                Ok(page) => {
                    state.page.set(page);
                    state.error.set(None);
                }
                Err(e) => state.error.set(Some(e.to_string())),
            }
            state.loading.set(false);
        });
    }

    /// Re-applies the criteria; local resources re-page their cached rows
    pub fn requery(&self) {
        if R::MODE == FetchMode::Local {
            if let Some(rows) = self.cache.get_value() {
                let query = self.query.get_untracked();
                self.sequence.update_value(|seq| seq.invalidate());
                self.page.set(query_local(rows, &query));
                self.loading.set(false);
                return;
            }
        }
        self.load();
    }

    /// Filter change: always restarts from the first page
    pub fn update_filter(&self, f: impl FnOnce(&mut ListQuery)) {
        self.query.update(|q| {
            f(q);
            q.page = 0;
        });
        self.requery();
    }

    pub fn set_keyword(&self, keyword: String) {
        self.update_filter(|q| q.keyword = keyword);
    }

    pub fn toggle_status(&self, code: &str) {
        self.update_filter(|q| {
            if let Some(pos) = q.status.iter().position(|s| s == code) {
                q.status.remove(pos);
            } else {
                q.status.push(code.to_string());
            }
        });
    }

    pub fn set_date_from(&self, value: String) {
        self.update_filter(|q| q.date_from = (!value.is_empty()).then_some(value));
    }

    pub fn set_date_to(&self, value: String) {
        self.update_filter(|q| q.date_to = (!value.is_empty()).then_some(value));
    }

    pub fn reset_filters(&self) {
        self.update_filter(|q| *q = ListQuery::new(q.size));
    }

    pub fn go_to_page(&self, page: usize) {
        self.query.update(|q| q.page = page);
        self.requery();
    }

    /// Asks for confirmation, deletes and refetches; the row stays on failure
    pub fn delete_row(&self, row: &R::Row, confirm_text: &str) {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(confirm_text).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        let state = *self;
        let path = R::delete_path(row);
        spawn_local(async move {
            match api_utils::delete(&path).await {
                Ok(()) => {
                    log::info!("deleted {}", path);
                    let page = state.page.with_untracked(|p| p.page_after_removal());
                    state.query.update(|q| q.page = page);
                    state.load();
                }
                Err(e) => state.error.set(Some(format!("삭제하지 못했습니다: {}", e))),
            }
        });
    }
}

impl<R: ListResource> Default for ListState<R> {
    fn default() -> Self {
        Self::new()
    }
}
