//! Route calculation request

use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::EvParameters;
use crate::value_objects::{
    AreaFeature, ReturnAttribute, RoutingMode, Selection, SpanAttribute, TrafficMode,
    TransportMode, Waypoint,
};

/// Parameters of a single route calculation
///
/// Created fresh per call. Validation and serialisation to query parameters
/// happen in the client, so a request can be assembled from partially
/// trusted input (e.g. a config file) and rejected before any network I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Start of the route
    pub origin: Waypoint,
    /// End of the route
    pub destination: Waypoint,
    /// Intermediate stops in travel order; duplicates allowed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub via: Vec<Waypoint>,
    /// Mode of transport; must be a valid selection
    pub transport_mode: Selection<TransportMode>,
    /// Optimisation target
    #[serde(default)]
    pub routing_mode: Selection<RoutingMode>,
    /// Traffic handling
    #[serde(default)]
    pub traffic_mode: Selection<TrafficMode>,
    /// Departure time, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<String>,
    /// Response attributes; `summary` when empty
    #[serde(default, rename = "return", skip_serializing_if = "Vec::is_empty")]
    pub return_attributes: Vec<ReturnAttribute>,
    /// Span annotations; requires [`ReturnAttribute::Polyline`]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<SpanAttribute>,
    /// Features to avoid
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_features: Vec<Selection<AreaFeature>>,
    /// EV consumption and charging parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev: Option<EvParameters>,
}

impl RouteRequest {
    /// Create a request with the mandatory fields
    #[must_use]
    pub fn new(
        origin: Waypoint,
        destination: Waypoint,
        transport_mode: impl Into<Selection<TransportMode>>,
    ) -> Self {
        Self {
            origin,
            destination,
            via: Vec::new(),
            transport_mode: transport_mode.into(),
            routing_mode: Selection::Unspecified,
            traffic_mode: Selection::Unspecified,
            departure_time: None,
            return_attributes: Vec::new(),
            spans: Vec::new(),
            avoid_features: Vec::new(),
            ev: None,
        }
    }

    /// Append a via waypoint
    #[must_use]
    pub fn via(mut self, waypoint: Waypoint) -> Self {
        self.via.push(waypoint);
        self
    }

    /// Set the routing mode
    #[must_use]
    pub fn with_routing_mode(mut self, mode: impl Into<Selection<RoutingMode>>) -> Self {
        self.routing_mode = mode.into();
        self
    }

    /// Set the traffic mode
    #[must_use]
    pub fn with_traffic_mode(mut self, mode: impl Into<Selection<TrafficMode>>) -> Self {
        self.traffic_mode = mode.into();
        self
    }

    /// Set the departure time as an opaque string
    #[must_use]
    pub fn with_departure_time(mut self, departure_time: impl Into<String>) -> Self {
        self.departure_time = Some(departure_time.into());
        self
    }

    /// Set the departure time from a timestamp, formatted as RFC 3339
    #[must_use]
    pub fn depart_at<Tz>(self, departure: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.with_departure_time(departure.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Request an additional response attribute
    #[must_use]
    pub fn return_attribute(mut self, attribute: ReturnAttribute) -> Self {
        self.return_attributes.push(attribute);
        self
    }

    /// Request an additional span attribute
    #[must_use]
    pub fn span(mut self, attribute: SpanAttribute) -> Self {
        self.spans.push(attribute);
        self
    }

    /// Avoid an additional feature
    #[must_use]
    pub fn avoid(mut self, feature: impl Into<Selection<AreaFeature>>) -> Self {
        self.avoid_features.push(feature.into());
        self
    }

    /// Attach EV parameters
    #[must_use]
    pub fn with_ev(mut self, ev: EvParameters) -> Self {
        self.ev = Some(ev);
        self
    }

    /// Check whether a response attribute was explicitly requested
    #[must_use]
    pub fn requests_return(&self, attribute: ReturnAttribute) -> bool {
        self.return_attributes.contains(&attribute)
    }
}
