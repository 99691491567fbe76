use contracts::domain::a009_manager::{Manager, ManagerStatus};
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::{status_badge, ListResource};

impl Searchable for Manager {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.name, keyword)
            || contains_ci(&self.phone, keyword)
            || contains_ci(&self.region, keyword)
    }

    fn status_code(&self) -> Option<&str> {
        Some(self.status.code())
    }
}

pub fn status_tone(status: ManagerStatus) -> &'static str {
    match status {
        ManagerStatus::Pending => "warning",
        ManagerStatus::Active => "success",
        ManagerStatus::Suspended => "error",
    }
}

pub struct AdminManagers;

impl ListResource for AdminManagers {
    type Row = Manager;

    const ENDPOINT: &'static str = "/api/admin/managers";

    fn columns() -> Vec<&'static str> {
        vec!["번호", "이름", "연락처", "활동 지역", "평점", "등록일", "상태"]
    }

    fn cells(row: &Manager) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            row.name.clone().into_any(),
            row.phone.clone().into_any(),
            row.region.clone().into_any(),
            format!("{:.1}", row.rating).into_any(),
            format_date(&row.created_at).into_any(),
            status_badge(row.status.label(), status_tone(row.status)),
        ]
    }

    fn row_id(row: &Manager) -> i64 {
        row.id
    }

    fn status_options() -> Vec<(&'static str, &'static str)> {
        ManagerStatus::ALL.into_iter().map(|s| (s.code(), s.label())).collect()
    }
}
