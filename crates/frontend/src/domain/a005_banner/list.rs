use contracts::domain::a005_banner::Banner;
use leptos::prelude::*;

use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::{status_badge, ListResource};

impl Searchable for Banner {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.title, keyword)
            || self.link_url.as_deref().is_some_and(|l| contains_ci(l, keyword))
    }

    fn status_code(&self) -> Option<&str> {
        Some(if self.active { "ACTIVE" } else { "INACTIVE" })
    }

    fn filter_date(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

pub struct AdminBanners;

impl ListResource for AdminBanners {
    type Row = Banner;

    const ENDPOINT: &'static str = "/api/admin/banners";
    const DATE_FILTER: bool = true;

    fn columns() -> Vec<&'static str> {
        vec!["미리보기", "제목", "게시 기간", "상태"]
    }

    fn cells(row: &Banner) -> Vec<AnyView> {
        vec![
            view! { <img class="banner-thumb" src=row.image_url.clone() alt=row.title.clone() /> }.into_any(),
            row.title.clone().into_any(),
            format!("{} ~ {}", row.start_date, row.end_date).into_any(),
            if row.active {
                status_badge("게시중", "success")
            } else {
                status_badge("숨김", "neutral")
            },
        ]
    }

    fn row_id(row: &Banner) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        vec![("ACTIVE", "게시중"), ("INACTIVE", "숨김")]
    }
}
