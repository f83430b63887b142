//! API utilities for frontend-backend communication
//!
//! The page is served by the backend itself, so API paths are same-origin.

use gloo_net::http::Response;
use std::fmt;

/// Build a full API URL from a path relative to `/api`
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_url;
/// assert_eq!(api_url("/catalog/facets"), "/api/catalog/facets");
/// ```
pub fn api_url(path: &str) -> String {
    format!("/api{}", path)
}

/// Failed API call. `status` is `None` when no response arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: String,
}

impl ApiError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    /// Builds the error from a failed response.
    ///
    /// The backend answers errors with `{"error": "..."}`; anything else falls
    /// back to the HTTP status.
    pub async fn from_response(response: Response) -> Self {
        let status = response.status();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("error")
                .and_then(|e| e.as_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP error: {}", status)),
            Err(_) => format!("HTTP error: {}", status),
        };
        Self {
            status: Some(status),
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Readable message of a failed response
pub async fn error_message(response: Response) -> String {
    ApiError::from_response(response).await.message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_only_for_404() {
        let not_found = ApiError {
            status: Some(404),
            message: "session not found".to_string(),
        };
        assert!(not_found.is_not_found());
        assert_eq!(not_found.to_string(), "session not found");

        assert!(!ApiError::network("Request failed").is_not_found());
        assert!(!ApiError {
            status: Some(503),
            message: "catalog file not found".to_string(),
        }
        .is_not_found());
    }
}
