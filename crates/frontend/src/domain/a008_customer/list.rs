use contracts::domain::a008_customer::Customer;
use leptos::prelude::*;

use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{contains_ci, Searchable};
use crate::shared::resource_list::ListResource;

impl Searchable for Customer {
    fn matches_keyword(&self, keyword: &str) -> bool {
        contains_ci(&self.name, keyword)
            || contains_ci(&self.phone, keyword)
            || self.email.as_deref().is_some_and(|e| contains_ci(e, keyword))
    }

    fn filter_date(&self) -> Option<&str> {
        self.created_at.get(..10)
    }
}

pub struct AdminCustomers;

impl ListResource for AdminCustomers {
    type Row = Customer;

    const ENDPOINT: &'static str = "/api/admin/customers";
    const DATE_FILTER: bool = true;

    fn columns() -> Vec<&'static str> {
        vec!["번호", "이름", "연락처", "이메일", "예약 수", "가입일"]
    }

    fn cells(row: &Customer) -> Vec<AnyView> {
        vec![
            row.id.into_any(),
            row.name.clone().into_any(),
            row.phone.clone().into_any(),
            row.email.clone().unwrap_or_default().into_any(),
            format!("{}건", row.reservation_count).into_any(),
            format_date(&row.created_at).into_any(),
        ]
    }

    fn row_id(row: &Customer) -> i64 {
        row.id
    }
}
