use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::validation::{FieldError, TextRules};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: i64,
    pub title: String,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub active: bool,
}

impl Banner {
    /// Active flag set and `today` inside `[start_date, end_date]`
    pub fn is_visible_on(&self, today: NaiveDate) -> bool {
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok();
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d").ok();
        match (start, end) {
            (Some(start), Some(end)) => self.active && start <= today && today <= end,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BannerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub image_url: String,
    pub link_url: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub active: bool,
}

impl BannerDto {
    pub fn from_banner(banner: &Banner) -> Self {
        Self {
            id: Some(banner.id),
            title: banner.title.clone(),
            image_url: banner.image_url.clone(),
            link_url: banner.link_url.clone(),
            start_date: banner.start_date.clone(),
            end_date: banner.end_date.clone(),
            active: banner.active,
        }
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        TextRules::required().max(50).check(&self.title, "배너 제목")?;
        TextRules::required().check(&self.image_url, "이미지 URL")?;
        let start = NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d")
            .map_err(|_| FieldError::Required("게시 시작일"))?;
        let end = NaiveDate::parse_from_str(&self.end_date, "%Y-%m-%d")
            .map_err(|_| FieldError::Required("게시 종료일"))?;
        if end < start {
            return Err(FieldError::InvertedPeriod("게시 기간"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_window() {
        let banner = Banner {
            id: 1,
            title: "가을 이벤트".to_string(),
            image_url: "/img/fall.png".to_string(),
            link_url: None,
            start_date: "2026-10-01".to_string(),
            end_date: "2026-10-31".to_string(),
            active: true,
        };
        let day = |d| NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
        assert!(banner.is_visible_on(day(1)));
        assert!(banner.is_visible_on(day(31)));
        assert!(!Banner { active: false, ..banner.clone() }.is_visible_on(day(15)));
        assert!(!banner.is_visible_on(NaiveDate::from_ymd_opt(2026, 11, 1).unwrap()));
    }

    #[test]
    fn test_dto_rejects_inverted_period() {
        let dto = BannerDto {
            title: "배너".to_string(),
            image_url: "/img/a.png".to_string(),
            start_date: "2026-10-10".to_string(),
            end_date: "2026-10-01".to_string(),
            ..Default::default()
        };
        assert_eq!(dto.validate(), Err(FieldError::InvertedPeriod("게시 기간")));
    }
}
