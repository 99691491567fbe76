use crate::shared::icons::icon;
use leptos::prelude::*;

/// Number of page buttons shown around the current page
const PAGE_WINDOW: usize = 5;

/// Page numbers (0-indexed) of the button window around `current`
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages == 0 {
        return vec![0];
    }
    let half = PAGE_WINDOW / 2;
    let start = current
        .saturating_sub(half)
        .min(total_pages.saturating_sub(PAGE_WINDOW));
    let end = (start + PAGE_WINDOW).min(total_pages);
    (start..end).collect()
}

/// PaginationControls component - first/prev, numbered pages, next/last
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="첫 페이지"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="이전 페이지"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                page_window(current, total_pages.get())
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class="pagination-btn pagination-btn--number"
                                class:pagination-btn--active=page == current
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page + 1}
                            </button>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="다음 페이지"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="마지막 페이지"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-info">
                {move || format!("총 {}건", total_count.get())}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(0, 0), vec![0]);
        assert_eq!(page_window(0, 3), vec![0, 1, 2]);
        assert_eq!(page_window(0, 10), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(5, 10), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10), vec![5, 6, 7, 8, 9]);
    }
}
