//! Paginated list envelope and list query shared by every admin resource.

use serde::{Deserialize, Serialize};

/// Page metadata as sent by the backend (`number` is 0-indexed)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub number: usize,
    #[serde(default)]
    pub size: usize,
    pub total_elements: usize,
    pub total_pages: usize,
}

impl PageMeta {
    pub fn new(number: usize, size: usize, total_elements: usize) -> Self {
        Self {
            number,
            size,
            total_elements,
            total_pages: total_pages(total_elements, size),
        }
    }
}

/// One page of a list response: `{ content: [...], page: {...} }`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: PageMeta,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            page: PageMeta::default(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of page buttons to render; never less than one
    pub fn page_count(&self) -> usize {
        self.page.total_pages.max(1)
    }

    /// Page to reload after one row of this page was removed: steps back
    /// when the removed row was the only one on a later page
    pub fn page_after_removal(&self) -> usize {
        if self.content.len() <= 1 && self.page.number > 0 {
            self.page.number - 1
        } else {
            self.page.number
        }
    }
}

/// `ceil(total_elements / page_size)`; a zero page size yields zero pages
pub fn total_pages(total_elements: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_elements.div_ceil(page_size)
}

/// Cuts one page out of an already filtered list.
///
/// A page number past the end is clamped to the last page so that a delete on
/// the final page never leaves the user looking at an empty table.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total = items.len();
    let pages = total_pages(total, page_size);
    let number = page.min(pages.saturating_sub(1));
    let start = number * page_size;
    let content: Vec<T> = items.into_iter().skip(start).take(page_size).collect();

    Page {
        content,
        page: PageMeta {
            number,
            size: page_size,
            total_elements: total,
            total_pages: pages,
        },
    }
}

/// Filter criteria of a list request, serialized as the query string
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub keyword: String,
    /// Sent as one comma-separated value: `status=PENDING,MATCHED`
    #[serde(default, skip_serializing_if = "Vec::is_empty", with = "comma_list")]
    pub status: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub page: usize,
    pub size: usize,
}

impl ListQuery {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Any criterion other than the page position is set
    pub fn has_filters(&self) -> bool {
        !self.keyword.trim().is_empty()
            || !self.status.is_empty()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }

    /// Inclusive date-range check on ISO `YYYY-MM-DD` prefixes
    pub fn date_in_range(&self, date: &str) -> bool {
        let day = date.get(..10).unwrap_or(date);
        if let Some(from) = self.date_from.as_deref() {
            if day < from {
                return false;
            }
        }
        if let Some(to) = self.date_to.as_deref() {
            if day > to {
                return false;
            }
        }
        true
    }

    pub fn status_allowed(&self, status: &str) -> bool {
        self.status.is_empty() || self.status.iter().any(|s| s == status)
    }
}

mod comma_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&values.join(","))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_paginate_consistency() {
        for total in [0usize, 1, 9, 10, 11, 25, 100] {
            for size in [1usize, 3, 10] {
                let items: Vec<usize> = (0..total).collect();
                let page = paginate(items, 1, size);
                assert_eq!(page.page.total_pages, total.div_ceil(size));
                assert_eq!(page.page.total_elements, total);
                assert!(page.content.len() <= size);
            }
        }
    }

    #[test]
    fn test_paginate_clamps_past_the_end() {
        let page = paginate((0..25).collect::<Vec<_>>(), 7, 10);
        assert_eq!(page.page.number, 2);
        assert_eq!(page.content, vec![20, 21, 22, 23, 24]);
    }

    #[test]
    fn test_removing_last_row_steps_back() {
        let last = paginate((0..21).collect::<Vec<u32>>(), 2, 10);
        assert_eq!(last.content.len(), 1);
        assert_eq!(last.page_after_removal(), 1);

        let full = paginate((0..21).collect::<Vec<u32>>(), 1, 10);
        assert_eq!(full.page_after_removal(), 1);

        let first = paginate(vec![7u32], 0, 10);
        assert_eq!(first.page_after_removal(), 0);
    }

    #[test]
    fn test_page_deserializes_backend_shape() {
        let raw = r#"{"content":[1,2],"page":{"number":0,"size":2,"totalElements":5,"totalPages":3}}"#;
        let page: Page<u32> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.content, vec![1, 2]);
        assert_eq!(page.page, PageMeta::new(0, 2, 5));
    }

    #[test]
    fn test_list_query_date_range() {
        let query = ListQuery {
            date_from: Some("2026-10-01".to_string()),
            date_to: Some("2026-10-31".to_string()),
            ..ListQuery::new(10)
        };
        assert!(query.date_in_range("2026-10-01"));
        assert!(query.date_in_range("2026-10-31T23:00:00"));
        assert!(!query.date_in_range("2026-11-01"));
        assert!(!query.date_in_range("2026-09-30"));
        assert!(query.has_filters());
        assert!(!ListQuery::new(10).has_filters());
    }

    #[test]
    fn test_status_is_comma_joined() {
        let query = ListQuery {
            status: vec!["PENDING".to_string(), "MATCHED".to_string()],
            ..ListQuery::new(10)
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["status"], "PENDING,MATCHED");
        let back: ListQuery = serde_json::from_value(json).unwrap();
        assert_eq!(back, query);
    }
}
