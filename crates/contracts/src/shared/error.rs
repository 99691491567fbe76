use serde::{Deserialize, Serialize};

/// Error envelope returned by the backend for any non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiErrorBody {
    /// Parses an error body, returning `None` for empty or foreign payloads
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str::<ApiErrorBody>(raw)
            .ok()
            .filter(|body| !body.message.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_message() {
        let body = ApiErrorBody::parse(r#"{"message":"이미 예약된 시간입니다","code":"R409"}"#);
        assert_eq!(
            body,
            Some(ApiErrorBody {
                message: "이미 예약된 시간입니다".to_string(),
                code: Some("R409".to_string()),
            })
        );
    }

    #[test]
    fn test_parse_rejects_blank_and_html() {
        assert_eq!(ApiErrorBody::parse(r#"{"message":"  "}"#), None);
        assert_eq!(ApiErrorBody::parse("<html>502 Bad Gateway</html>"), None);
    }
}
