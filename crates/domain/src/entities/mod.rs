//! Entities - request and response structures of the routing API

mod error_response;
mod ev_parameters;
mod route_request;
mod route_response;

pub use error_response::ErrorResponse;
pub use ev_parameters::{ConsumptionCurve, EvParameters};
pub use route_request::RouteRequest;
pub use route_response::{
    Agency, Departure, Notice, Place, Route, RouteResponse, Section, Summary, Transport,
};
