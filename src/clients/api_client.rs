use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Thin JSON client for the `/api/` surface of the booking backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> BookingResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> BookingResult<T> {
        let request = self
            .http
            .get(self.endpoint_url(endpoint))
            .header("Accept", "application/json")
            .query(query);
        self.send(endpoint, request).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> BookingResult<T> {
        let request = self
            .http
            .post(self.endpoint_url(endpoint))
            .header("Accept", "application/json")
            .json(body);
        self.send(endpoint, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        request: reqwest::RequestBuilder,
    ) -> BookingResult<T> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, endpoint, "api request");

        let response = request.send().await.map_err(|err| {
            error!(%request_id, endpoint, error = %err, "api request failed");
            BookingError::Transport(err)
        })?;

        let status = response.status();
        let text = response.text().await?; // read the body once

        if !status.is_success() {
            let message = error_message(status.as_u16(), &text);
            error!(%request_id, endpoint, status = status.as_u16(), %message, "api error response");
            return Err(BookingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|err| {
            error!(%request_id, endpoint, error = %err, "malformed api response");
            BookingError::Decode(err)
        })
    }
}

/// Message of a non-2xx response: the body's `error` field when present.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_field_is_preferred() {
        assert_eq!(error_message(400, r#"{"error": "Email required"}"#), "Email required");
    }

    #[test]
    fn status_is_used_without_error_field() {
        assert_eq!(error_message(502, "<html>bad gateway</html>"), "HTTP 502");
        assert_eq!(error_message(404, r#"{"error": ""}"#), "HTTP 404");
    }

    #[test]
    fn endpoint_urls_share_the_api_prefix() {
        let client = ApiClient::new("http://clinic.test/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            client.endpoint_url("doctors/3/reviews"),
            "http://clinic.test/api/doctors/3/reviews"
        );
    }
}
