use contracts::domain::a006_inquiry::{Inquiry, InquiryStatus};
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::{status_badge, FetchMode, ListResource};

impl Searchable for Inquiry {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.title, keyword)
            || contains_ci(&self.content, keyword)
            || contains_ci(&self.author, keyword)
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }

    fn filter_date(&self) -> Option<&str> {
        self.created_at.get(..10)
    }
}

fn status_cell(status: InquiryStatus) -> AnyView {
    let tone = match status {
        InquiryStatus::Pending => "warning",
        InquiryStatus::Answered => "success",
    };
    status_badge(status.label(), tone)
}

fn inquiry_status_options() -> Vec<(&'static str, &'static str)> {
    InquiryStatus::ALL.into_iter().map(|s| (s.code(), s.label())).collect()
}

pub struct AdminInquiries;

impl ListResource for AdminInquiries {
    type Row = Inquiry;

    const ENDPOINT: &'static str = "/api/admin/inquiries";
    const DATE_FILTER: bool = true;

    fn columns() -> Vec<&'static str> {
        vec!["번호", "제목", "작성자", "작성일", "상태"]
    }

    fn cells(row: &Inquiry) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            row.title.clone().into_any(),
            row.author.clone().into_any(),
            format_date(&row.created_at).into_any(),
            status_cell(row.status),
        ]
    }

    fn row_id(row: &Inquiry) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        inquiry_status_options()
    }
}

/// The signed-in customer's inquiries, paged in the browser
pub struct MyInquiries;

impl ListResource for MyInquiries {
    type Row = Inquiry;

    const ENDPOINT: &'static str = "/api/inquiries/me";
    const MODE: FetchMode = FetchMode::Local;
    const DELETABLE: bool = false;

    fn columns() -> Vec<&'static str> {
        vec!["제목", "작성일", "상태"]
    }

    fn cells(row: &Inquiry) -> Vec<AnyView> {
        vec![
            row.title.clone().into_any(),
            format_date(&row.created_at).into_any(),
            status_cell(row.status),
        ]
    }

    fn row_id(row: &Inquiry) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        inquiry_status_options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page::ListQuery;

    use crate::shared::list_utils::query_local;

    fn inquiry(id: i64, title: &str, status: InquiryStatus) -> Inquiry {
        Inquiry {
            id,
            author: "홍길동".to_string(),
            title: title.to_string(),
            content: "문의 내용입니다".to_string(),
            status,
            answer: None,
            created_at: format!("2026-10-{:02}T12:00:00", id),
        }
    }

    #[test]
    fn test_status_filter_on_local_rows() {
        let rows = vec![
            inquiry(1, "결제 문의", InquiryStatus::Pending),
            inquiry(2, "매니저 변경", InquiryStatus::Answered),
            inquiry(3, "환불 문의", InquiryStatus::Pending),
        ];
        let mut query = ListQuery::new(10);
        query.status = vec!["PENDING".to_string()];
        let page = query_local(rows.clone(), &query);
        assert_eq!(page.page.total_elements, 2);

        query.keyword = "환불".to_string();
        let page = query_local(rows, &query);
        assert_eq!(page.content.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3]);
    }
}
