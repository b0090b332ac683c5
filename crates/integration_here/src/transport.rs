//! HTTP transport
//!
//! The routing client only ever needs "send this request, give me status,
//! headers and body". [`HttpTransport`] is that seam; [`ReqwestTransport`]
//! is the production implementation. Timeouts, authentication and honouring
//! cancellation belong here, not in request building or decoding.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
#[cfg(test)]
use mockall::automock;
use reqwest::header::HeaderMap;
use reqwest::{Client, Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use url::Url;

use crate::config::RoutingConfig;
use crate::error::TransportError;

/// Raw HTTP response as seen by the decoder
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response status
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Bytes,
}

/// Trait for HTTP transports used by the routing client
#[cfg_attr(test, automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request and return the raw response
    ///
    /// `query` is an already encoded query string that replaces any query on
    /// `url`. Implementations must stop waiting and return
    /// [`TransportError::Cancelled`] once `cancel` fires.
    async fn send(
        &self,
        cancel: &CancellationToken,
        method: Method,
        url: &Url,
        query: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, TransportError>;
}

/// reqwest-based transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    api_key: Option<SecretString>,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a new transport from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, TransportError> {
        config.validate().map_err(TransportError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransportError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Final request URL, with the API key appended after the built query
    fn request_url(&self, url: &Url, query: &str) -> Url {
        let mut url = url.clone();
        url.set_query((!query.is_empty()).then_some(query));
        if let Some(api_key) = &self.api_key {
            url.query_pairs_mut()
                .append_pair("apiKey", api_key.expose_secret());
        }
        url
    }

    fn map_send_error(&self, e: &reqwest::Error) -> TransportError {
        if e.is_timeout() {
            TransportError::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            TransportError::ConnectionFailed(e.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip_all, fields(method = %method, url = %url))]
    async fn send(
        &self,
        cancel: &CancellationToken,
        method: Method,
        url: &Url,
        query: &str,
        body: Option<Bytes>,
    ) -> Result<RawResponse, TransportError> {
        let mut request = self.client.request(method, self.request_url(url, query));
        if let Some(body) = body {
            request = request.body(body);
        }

        debug!(query, "Sending request");

        let response = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TransportError::Cancelled),
            result = request.send() => result.map_err(|e| self.map_send_error(&e))?,
        };

        let status = response.status();
        let headers = response.headers().clone();

        let body = tokio::select! {
            biased;
            () = cancel.cancelled() => return Err(TransportError::Cancelled),
            result = response.bytes() => result.map_err(|e| {
                if e.is_timeout() {
                    self.map_send_error(&e)
                } else {
                    TransportError::Body(e.to_string())
                }
            })?,
        };

        debug!(status = status.as_u16(), bytes = body.len(), "Response received");

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}
