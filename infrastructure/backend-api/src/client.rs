use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use business::domain::errors::GatewayError;

/// Shared HTTP client for the kitchen backend. Clones share one connection pool.
#[derive(Clone)]
pub struct BackendClient {
    pub client: Client,
    /// API root without a trailing slash, e.g. `http://127.0.0.1:5000/api`.
    pub base_url: String,
}

impl BackendClient {
    /// Fails when the TLS backend or system configuration cannot be loaded.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Joins a resource path onto the API root.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends the request and decodes a JSON body, mapping failures onto [`GatewayError`].
    pub async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::unavailable(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::unavailable(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, &text));
        }

        serde_json::from_str(&text).map_err(|e| GatewayError::decode(e.to_string()))
    }
}

fn status_error(status: StatusCode, body: &str) -> GatewayError {
    if status == StatusCode::NOT_FOUND {
        return GatewayError::NotFound;
    }
    GatewayError::rejected(status.as_u16(), error_message(status.as_u16(), body))
}

/// Readable message from an error body: its `error` field, then `message`,
/// then a generic one naming the status.
pub fn error_message(status: u16, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            ["error", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()))
        })
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed ({})", status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn should_join_paths_without_double_slashes() {
        let client =
            BackendClient::new("http://127.0.0.1:5000/api/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url("/food/options"), "http://127.0.0.1:5000/api/food/options");
        assert_eq!(client.url("food"), "http://127.0.0.1:5000/api/food");
    }

    #[test]
    fn should_build_client_with_configured_timeout() {
        let client = BackendClient::new(" http://kitchen.local/api ", Duration::from_millis(250));

        assert!(client.is_ok_and(|c| c.base_url == "http://kitchen.local/api"));
    }

    #[test]
    fn should_prefer_error_field_then_message() {
        assert_eq!(
            error_message(400, r#"{"error":"Missing required fields"}"#),
            "Missing required fields"
        );
        assert_eq!(
            error_message(400, r#"{"status":"error","message":"Search query is required"}"#),
            "Search query is required"
        );
    }

    #[test]
    fn should_fall_back_to_status_for_unreadable_bodies() {
        assert_eq!(error_message(502, "<html>Bad Gateway</html>"), "Request failed (502)");
        assert_eq!(error_message(500, r#"{"error":"  "}"#), "Request failed (500)");
    }

    #[test]
    fn should_map_not_found_status() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, r#"{"error":"Food not found"}"#),
            GatewayError::NotFound
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_REQUEST, r#"{"error":"Invalid feedback type"}"#),
            GatewayError::Rejected { status: 400, .. }
        ));
    }
}
