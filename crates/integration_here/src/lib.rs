//! HERE Routing API v8 integration
//!
//! Typed client for the `routes` endpoint of the HERE Routing API
//! (<https://developer.here.com/documentation/routing-api>). Requests are
//! validated and serialized locally, sent through a pluggable
//! [`HttpTransport`], and decoded into [`domain::RouteResponse`].
//!
//! ```rust,ignore
//! use domain::{RouteRequest, TransportMode, Waypoint};
//! use integration_here::{HereRoutingClient, RoutingConfig, RoutingService};
//! use tokio_util::sync::CancellationToken;
//!
//! let config = RoutingConfig::default().with_api_key("...");
//! let client = HereRoutingClient::new(&config)?;
//!
//! let request = RouteRequest::new(
//!     Waypoint::new(57.707_752, 11.949_767),
//!     Waypoint::new(59.337_492, 18.063_672),
//!     TransportMode::Car,
//! );
//! let response = client.compute_routes(&CancellationToken::new(), &request).await?;
//! ```

pub mod builder;
pub mod client;
pub mod config;
pub mod decoder;
pub mod error;
pub mod query;
pub mod transport;

pub use builder::build_query;
pub use client::{HereRoutingClient, RoutingService};
pub use config::RoutingConfig;
pub use decoder::decode_response;
pub use error::{ResponseError, RoutingError, TransportError};
pub use query::QueryParams;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
