//! Client-side list helpers (search, paging) and the debounced search input
use contracts::shared::page::{paginate, ListQuery, Page};
use leptos::prelude::*;
use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

use crate::shared::config::config;
use crate::shared::icons::icon;

/// Types that can be matched against list filter criteria
pub trait Searchable {
    /// Case-insensitive substring match on the searchable text fields
    fn matches_keyword(&self, keyword: &str) -> bool;

    /// Status code used by the status filter, if the type has one
    fn status_code(&self) -> Option<&str> {
        None
    }

    /// ISO date used by the date-range filter, if the type has one
    fn filter_date(&self) -> Option<&str> {
        None
    }
}

/// Lower-cased `haystack` contains lower-cased `needle`
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keyword, status and date-range filtering
pub fn filter_list<T: Searchable>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    let keyword = query.keyword.trim();
    items
        .into_iter()
        .filter(|item| keyword.is_empty() || item.matches_keyword(keyword))
        .filter(|item| match item.status_code() {
            Some(code) => query.status_allowed(code),
            None => true,
        })
        .filter(|item| match item.filter_date() {
            Some(date) => query.date_in_range(date),
            None => true,
        })
        .collect()
}

/// Filters an already fetched list and cuts the requested page out of it
pub fn query_local<T: Searchable>(items: Vec<T>, query: &ListQuery) -> Page<T> {
    paginate(filter_list(items, query), query.page, query.size)
}

/// Text the search box must switch to after the bound value changed from
/// outside (filter reset, navigation). `None` keeps what the user is typing.
fn synced_search_text(previous: Option<&str>, current: &str, shown: &str) -> Option<String> {
    if previous == Some(current) || current == shown {
        return None;
    }
    previous.map(|_| current.to_string())
}

/// Search input with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value (for the "active" highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the debounced value
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "검색어를 입력하세요".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    // Only the newest keystroke fires once its delay has elapsed
    let generation = StoredValue::new(0u64);
    let delay = config().list.search_debounce_ms;

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let mine = generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation.get_value() == mine {
                on_change.run(new_value);
            }
        });
    };

    Effect::new(move |previous: Option<String>| {
        let current = value.get();
        let shown = input_value.get_untracked();
        if let Some(text) = synced_search_text(previous.as_deref(), &current, &shown) {
            generation.update_value(|g| *g += 1);
            set_input_value.set(text);
        }
        current
    });

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-input__clear" on:click=clear_filter title="지우기">
                    {icon("x")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: &'static str,
        status: &'static str,
        date: &'static str,
    }

    impl Searchable for Row {
        fn matches_keyword(&self, keyword: &str) -> bool {
            contains_ci(self.name, keyword)
        }
        fn status_code(&self) -> Option<&str> {
            Some(self.status)
        }
        fn filter_date(&self) -> Option<&str> {
            Some(self.date)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Kim Minsu", status: "PENDING", date: "2026-10-01" },
            Row { name: "Lee Jiwoo", status: "COMPLETED", date: "2026-10-05" },
            Row { name: "kim Hana", status: "COMPLETED", date: "2026-11-02" },
        ]
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let query = ListQuery { keyword: "KIM".to_string(), ..ListQuery::new(10) };
        assert_eq!(filter_list(rows(), &query).len(), 2);
    }

    #[test]
    fn test_status_and_date_filters_combine() {
        let query = ListQuery {
            status: vec!["COMPLETED".to_string()],
            date_to: Some("2026-10-31".to_string()),
            ..ListQuery::new(10)
        };
        let result = filter_list(rows(), &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Lee Jiwoo");
    }

    #[test]
    fn test_reset_clears_shown_keyword() {
        assert_eq!(synced_search_text(Some("kim"), "", "kim"), Some(String::new()));
        // reset while a newer keystroke was still pending
        assert_eq!(synced_search_text(Some("kim"), "", "kima"), Some(String::new()));
    }

    #[test]
    fn test_typing_is_not_overwritten() {
        assert_eq!(synced_search_text(None, "", ""), None);
        // debounced value caught up with the box
        assert_eq!(synced_search_text(Some(""), "kim", "kim"), None);
        // unrelated filter change re-notified the same keyword
        assert_eq!(synced_search_text(Some("kim"), "kim", "kimx"), None);
    }

    #[test]
    fn test_query_local_pages() {
        let query = ListQuery { page: 1, ..ListQuery::new(2) };
        let page = query_local(rows(), &query);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.page.total_pages, 2);
        assert_eq!(page.page.total_elements, 3);
    }
}
