use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldError, TextRules};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub pinned: bool,
    #[serde(default)]
    pub author: String,
    pub created_at: String,
}

/// Create and update payload; `id` is `None` on create
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NoticeDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
    pub pinned: bool,
}

impl NoticeDto {
    pub fn from_notice(notice: &Notice) -> Self {
        Self {
            id: Some(notice.id),
            title: notice.title.clone(),
            content: notice.content.clone(),
            pinned: notice.pinned,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        TextRules::required().max(100).check(&self.title, "제목")?;
        TextRules::required().max(5000).check(&self.content, "내용")
    }
}

/// Pinned notices first, newest first within each group
pub fn sort_for_display(notices: &mut [Notice]) {
    notices.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: i64, pinned: bool, created_at: &str) -> Notice {
        Notice {
            id,
            title: format!("공지 {id}"),
            content: String::new(),
            pinned,
            author: "관리자".to_string(),
            created_at: created_at.to_string(),
        }
    }

    #[test]
    fn test_pinned_first_then_newest() {
        let mut list = vec![
            notice(1, false, "2026-10-01"),
            notice(2, true, "2026-09-01"),
            notice(3, false, "2026-10-10"),
        ];
        sort_for_display(&mut list);
        let ids: Vec<i64> = list.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
