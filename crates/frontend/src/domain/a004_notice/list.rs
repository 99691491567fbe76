use contracts::domain::a004_notice::Notice;
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::{status_badge, ListResource};

impl Searchable for Notice {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.title, keyword) || contains_ci(&self.content, keyword)
    }

    fn filter_date(&self) -> Option<&str> {
        self.created_at.get(..10)
    }
}

fn title_cell(row: &Notice) -> AnyView {
    if row.pinned {
        view! {
            <span class="notice-title">
                {status_badge("고정", "info")}
                " "
                {row.title.clone()}
            </span>
        }
        .into_any()
    } else {
        row.title.clone().into_any()
    }
}

/// Admin CRUD table
pub struct AdminNotices;

impl ListResource for AdminNotices {
    type Row = Notice;

    const ENDPOINT: &'static str = "/api/admin/notices";
    const DATE_FILTER: bool = true;

    fn columns() -> Vec<&'static str> {
        vec!["번호", "제목", "작성자", "작성일"]
    }

    fn cells(row: &Notice) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            title_cell(row),
            row.author.clone().into_any(),
            format_date(&row.created_at).into_any(),
        ]
    }

    fn row_id(row: &Notice) -> i64 {
        row.id
    }
}

/// Read-only board for every visitor
pub struct PublicNotices;

impl ListResource for PublicNotices {
    type Row = Notice;

    const ENDPOINT: &'static str = "/api/notices";
    const DELETABLE: bool = false;

    fn columns() -> Vec<&'static str> {
        vec!["번호", "제목", "작성일"]
    }

    fn cells(row: &Notice) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            title_cell(row),
            format_date(&row.created_at).into_any(),
        ]
    }

    fn row_id(row: &Notice) -> i64 {
        row.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_search_and_date() {
        let notice = Notice {
            id: 1,
            title: "추석 연휴 휴무 안내".to_string(),
            content: "연휴 기간에는 예약이 제한됩니다".to_string(),
            pinned: true,
            author: "관리자".to_string(),
            created_at: "2026-09-20T09:00:00".to_string(),
        };
        assert!(notice.matches_keyword("휴무"));
        assert!(notice.matches_keyword("제한"));
        assert!(!notice.matches_keyword("이벤트"));
        assert_eq!(notice.filter_date(), Some("2026-09-20"));
    }
}
