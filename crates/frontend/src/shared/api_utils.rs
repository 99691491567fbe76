//! API utilities for frontend-backend communication
//!
//! Builds API URLs, attaches the bearer token and maps every failure into
//! [`ApiError`] so that pages only deal with one error type.

use contracts::domain::a002_reservation::InvalidTransition;
use contracts::shared::error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::shared::config::config;
use crate::system::auth::storage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("로그인이 필요합니다")]
    Unauthorized,
    #[error("서버에 연결할 수 없습니다: {0}")]
    Network(String),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("응답을 처리할 수 없습니다: {0}")]
    Decode(String),
    /// Rejected in the browser; no request was sent
    #[error(transparent)]
    Transition(#[from] InvalidTransition),
}

impl ApiError {
    /// Maps a non-2xx response; the server message wins over the generic text
    pub fn from_status(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        let message = ApiErrorBody::parse(body)
            .map(|b| b.message)
            .unwrap_or_else(|| format!("요청을 처리하지 못했습니다 (HTTP {})", status));
        ApiError::Status { status, message }
    }
}

/// Get the base URL for API requests
///
/// Uses the configured origin when present, otherwise the current window
/// location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:8080"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let cfg = config();
    if !cfg.api.base.is_empty() {
        return cfg.api.base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, cfg.api.port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/service-categories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Appends a serde_qs-encoded query string to `path`
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_status(status, &body);
    log::warn!("{} {} -> {}", status, response.url(), err);
    Err(err)
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = with_auth(builder)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, ApiError> {
    let request = with_auth(builder)
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Request::get(&api_url(path))).await?;
    read_json(response).await
}

pub async fn get_json_with_query<T: DeserializeOwned, Q: Serialize>(
    path: &str,
    query: &Q,
) -> Result<T, ApiError> {
    let path = with_query(path, query)?;
    get_json(&path).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let response = send_json(Request::post(&api_url(path)), body).await?;
    read_json(response).await
}

/// POST whose response body is ignored
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::post(&api_url(path)), body).await?;
    Ok(())
}

pub async fn post_empty(path: &str) -> Result<(), ApiError> {
    send(Request::post(&api_url(path))).await?;
    Ok(())
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    send_json(Request::put(&api_url(path)), body).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Request::delete(&api_url(path))).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page::ListQuery;

    #[test]
    fn test_status_error_prefers_server_message() {
        let err = ApiError::from_status(409, r#"{"message":"이미 예약된 시간입니다"}"#);
        assert_eq!(err.to_string(), "이미 예약된 시간입니다");
        let err = ApiError::from_status(500, "");
        assert_eq!(err.to_string(), "요청을 처리하지 못했습니다 (HTTP 500)");
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    }

    #[test]
    fn test_with_query() {
        let query = ListQuery {
            keyword: "김".to_string(),
            status: vec!["PENDING".to_string()],
            page: 2,
            ..ListQuery::new(10)
        };
        let url = with_query("/api/admin/reservations", &query).unwrap();
        assert!(url.starts_with("/api/admin/reservations?"));
        assert!(url.contains("status=PENDING"));
        assert!(url.contains("page=2"));
        assert!(url.contains("size=10"));
        assert!(!url.contains("dateFrom"));
    }
}
