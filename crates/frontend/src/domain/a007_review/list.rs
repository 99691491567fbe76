use contracts::domain::a007_review::{stars, Review};
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::ListResource;

impl Searchable for Review {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.content, keyword)
            || contains_ci(&self.author, keyword)
            || contains_ci(&self.manager_name, keyword)
    }

    fn status_code(&self) -> Option<&str> {
        const CODES: [&str; 6] = ["0", "1", "2", "3", "4", "5"];
        CODES.get(usize::from(self.rating)).copied()
    }

    fn filter_date(&self) -> Option<&str> {
        self.created_at.get(..10)
    }
}

/// Reviews can only be removed, never edited
pub struct AdminReviews;

impl ListResource for AdminReviews {
    type Row = Review;

    const ENDPOINT: &'static str = "/api/admin/reviews";
    const DATE_FILTER: bool = true;

    fn columns() -> Vec<&'static str> {
        vec!["예약번호", "작성자", "매니저", "평점", "내용", "작성일"]
    }

    fn cells(row: &Review) -> Vec<AnyView> {
        vec![
            row.reservation_id.into_any(),
            row.author.clone().into_any(),
            row.manager_name.clone().into_any(),
            view! { <span class="rating">{stars(row.rating)}</span> }.into_any(),
            row.content.clone().into_any(),
            format_date(&row.created_at).into_any(),
        ]
    }

    fn row_id(row: &Review) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        vec![("5", "★5"), ("4", "★4"), ("3", "★3"), ("2", "★2"), ("1", "★1")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_is_the_filter_code() {
        let review = Review {
            id: 1,
            reservation_id: 42,
            author: "홍길동".to_string(),
            manager_name: "김매니저".to_string(),
            rating: 4,
            content: "꼼꼼하게 청소해 주셨어요".to_string(),
            created_at: "2026-10-01T15:00:00".to_string(),
        };
        assert_eq!(review.status_code(), Some("4"));
        assert!(review.matches_keyword("매니저"));
        assert!(review.matches_keyword("꼼꼼"));
    }
}
