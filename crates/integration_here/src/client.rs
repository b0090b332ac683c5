//! HERE routing client
//!
//! Composes request building, the HTTP transport and response decoding for
//! the `routes` endpoint of the Routing API v8.

use async_trait::async_trait;
use domain::{RouteRequest, RouteResponse};
use reqwest::Method;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use url::Url;

use crate::builder::build_query;
use crate::config::RoutingConfig;
use crate::decoder::decode_response;
use crate::error::RoutingError;
use crate::transport::{HttpTransport, ReqwestTransport};

/// Trait for route calculation services
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Compute routes between origin and destination
    ///
    /// Validation errors are returned before any network I/O. Transport,
    /// decode and response errors are returned unmodified; no partial result
    /// is ever produced. `cancel` is handed to the transport as-is.
    async fn compute_routes(
        &self,
        cancel: &CancellationToken,
        request: &RouteRequest,
    ) -> Result<RouteResponse, RoutingError>;
}

/// Routing API v8 client over an [`HttpTransport`]
///
/// Holds no per-call state, so a single instance can serve concurrent
/// requests.
#[derive(Debug)]
pub struct HereRoutingClient<T = ReqwestTransport> {
    transport: T,
    routes_url: Url,
}

impl HereRoutingClient<ReqwestTransport> {
    /// Create a client backed by reqwest
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: &RoutingConfig) -> Result<Self, RoutingError> {
        config.validate().map_err(RoutingError::Configuration)?;
        let transport = ReqwestTransport::new(config)?;
        Self::with_transport(config, transport)
    }
}

impl<T: HttpTransport> HereRoutingClient<T> {
    /// Create a client with a custom transport
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL.
    pub fn with_transport(config: &RoutingConfig, transport: T) -> Result<Self, RoutingError> {
        let routes_url = config.routes_url().map_err(RoutingError::Configuration)?;
        Ok(Self {
            transport,
            routes_url,
        })
    }

    /// URL of the `routes` endpoint
    #[must_use]
    pub const fn routes_url(&self) -> &Url {
        &self.routes_url
    }
}

#[async_trait]
impl<T: HttpTransport> RoutingService for HereRoutingClient<T> {
    #[instrument(
        skip(self, cancel, request),
        fields(transport_mode = %request.transport_mode, via = request.via.len())
    )]
    async fn compute_routes(
        &self,
        cancel: &CancellationToken,
        request: &RouteRequest,
    ) -> Result<RouteResponse, RoutingError> {
        let query = build_query(request)?.encode();

        debug!(%query, "Computing routes");

        let response = self
            .transport
            .send(cancel, Method::GET, &self.routes_url, &query, None)
            .await?;

        decode_response(response.status, &response.body)
    }
}
