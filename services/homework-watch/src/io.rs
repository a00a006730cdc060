//! HTTP client abstraction for testability

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Abstraction over HTTP client for dependency injection
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL with the given headers
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> crate::Result<HttpResponse>;

    /// Send a POST request with form-encoded body
    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> crate::Result<HttpResponse>;
}

/// Production HTTP client using reqwest
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        let response = request
            .send()
            .await
            .map_err(|e| crate::WatchError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::WatchError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }

    async fn post_form(&self, url: &str, params: &[(&str, &str)]) -> crate::Result<HttpResponse> {
        tracing::debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .form(params)
            .send()
            .await
            .map_err(|e| crate::WatchError::Http(format!("POST {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::WatchError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A URL that will always refuse connections (port 1 is reserved and unbound)
    const UNREACHABLE_URL: &str = "http://127.0.0.1:1/test";

    #[tokio::test]
    async fn get_connection_refused_returns_http_error() {
        let client = ReqwestHttpClient::default();
        let err = client
            .get(UNREACHABLE_URL, &[("Authorization", "OAuth token")])
            .await
            .unwrap_err();

        match &err {
            crate::WatchError::Http(msg) => {
                assert!(
                    msg.starts_with("GET http://127.0.0.1:1/test failed:"),
                    "{msg}"
                );
            }
            other => panic!("expected WatchError::Http, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn post_form_connection_refused_returns_http_error() {
        let client = ReqwestHttpClient::default();
        let err = client
            .post_form(UNREACHABLE_URL, &[("key", "value")])
            .await
            .unwrap_err();

        match &err {
            crate::WatchError::Http(msg) => {
                assert!(
                    msg.starts_with("POST http://127.0.0.1:1/test failed:"),
                    "{msg}"
                );
            }
            other => panic!("expected WatchError::Http, got {other:?}"),
        }
    }
}
