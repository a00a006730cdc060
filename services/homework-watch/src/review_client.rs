//! Review API client
//!
//! Fetches homework statuses from the review endpoint. Each failure mode
//! maps to its own error kind so the poll loop can report it verbatim:
//! transport errors become [`WatchError::Ambiguous`], non-200 responses
//! become [`WatchError::EndpointUnreachable`] and undecodable bodies become
//! [`WatchError::Decode`].

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::io::HttpClient;
use crate::{Result, WatchError};

/// Client for the homework review API
pub struct ReviewClient {
    endpoint: String,
    api_token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for ReviewClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReviewClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl ReviewClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created ReviewClient for {}", config.endpoint);
        Self {
            endpoint: config.endpoint.clone(),
            api_token: config.api_token.clone(),
            http,
        }
    }

    /// Fetch homework statuses updated since `from_date` (Unix seconds)
    pub async fn fetch(&self, from_date: i64) -> Result<Value> {
        let url = format!("{}?from_date={}", self.endpoint, from_date);
        let auth = format!("OAuth {}", self.api_token);

        let response = self
            .http
            .get(&url, &[("Authorization", &auth)])
            .await
            .map_err(|e| WatchError::Ambiguous(e.to_string()))?;

        if response.status != 200 {
            return Err(WatchError::EndpointUnreachable {
                endpoint: self.endpoint.clone(),
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| WatchError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CursorPolicy;
    use crate::io::{HttpResponse, MockHttpClient};
    use std::time::Duration;

    fn test_config() -> Config {
        Config {
            api_token: "secret-token".to_string(),
            bot_token: "bot-token".to_string(),
            chat_id: "42".to_string(),
            endpoint: "http://localhost:9000/statuses/".to_string(),
            poll_interval: Duration::from_secs(600),
            cursor_policy: CursorPolicy::Rescan,
        }
    }

    #[tokio::test]
    async fn fetch_builds_url_and_auth_header() {
        let mut mock = MockHttpClient::new();
        mock.expect_get()
            .withf(|url, headers| {
                url == "http://localhost:9000/statuses/?from_date=1700000000"
                    && headers.contains(&("Authorization", "OAuth secret-token"))
            })
            .returning(|_, _| {
                Box::pin(async {
                    Ok(HttpResponse {
                        status: 200,
                        body: r#"{"homeworks": [], "current_date": 1700000100}"#.to_string(),
                    })
                })
            });

        let client = ReviewClient::new(&test_config(), Arc::new(mock));
        let value = client.fetch(1_700_000_000).await.unwrap();
        assert_eq!(value["current_date"], 1_700_000_100);
    }

    #[tokio::test]
    async fn fetch_wraps_transport_errors_as_ambiguous() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async { Err(crate::WatchError::Http("connection reset".to_string())) })
        });

        let client = ReviewClient::new(&test_config(), Arc::new(mock));
        let err = client.fetch(0).await.unwrap_err();
        match &err {
            WatchError::Ambiguous(msg) => assert!(msg.contains("connection reset"), "{msg}"),
            other => panic!("expected WatchError::Ambiguous, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_maps_non_200_to_endpoint_unreachable() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 503,
                    body: "Service Unavailable".to_string(),
                })
            })
        });

        let client = ReviewClient::new(&test_config(), Arc::new(mock));
        let err = client.fetch(0).await.unwrap_err();
        match &err {
            WatchError::EndpointUnreachable { endpoint, status } => {
                assert_eq!(endpoint, "http://localhost:9000/statuses/");
                assert_eq!(*status, 503);
            }
            other => panic!("expected EndpointUnreachable, got {other:?}"),
        }
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn fetch_maps_invalid_json_to_decode_error() {
        let mut mock = MockHttpClient::new();
        mock.expect_get().returning(|_, _| {
            Box::pin(async {
                Ok(HttpResponse {
                    status: 200,
                    body: "<html>not json</html>".to_string(),
                })
            })
        });

        let client = ReviewClient::new(&test_config(), Arc::new(mock));
        let err = client.fetch(0).await.unwrap_err();
        assert!(matches!(err, WatchError::Decode(_)));
    }
}
