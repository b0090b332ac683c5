//! Route calculation response
//!
//! Mirrors the `RouterRouteResponse` schema of the Routing API v8.

use serde::{Deserialize, Serialize};

use crate::value_objects::Waypoint;

/// Returns a list of routes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteResponse {
    /// Issues encountered while processing the request
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<Notice>,
    /// Possible routes
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl RouteResponse {
    /// Check whether no route was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// An issue reported by the service alongside a result
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notice {
    /// Human-readable description
    #[serde(default)]
    pub title: String,
    /// Machine-readable notice code
    #[serde(default)]
    pub code: String,
    /// `critical` or `info`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

/// A single route alternative
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Route {
    /// Unique identifier of the route
    pub id: String,
    /// Sections of the route in travel order
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Route {
    /// Summary totals across all sections
    ///
    /// Optional fields are summed only over sections that report them.
    #[must_use]
    pub fn total_summary(&self) -> Summary {
        self.sections
            .iter()
            .map(|s| &s.summary)
            .fold(Summary::default(), |acc, s| Summary {
                duration: acc.duration + s.duration,
                length: acc.length + s.length,
                base_duration: sum_optional(acc.base_duration, s.base_duration),
                typical_duration: sum_optional(acc.typical_duration, s.typical_duration),
                consumption: match (acc.consumption, s.consumption) {
                    (Some(a), Some(b)) => Some(a + b),
                    (a, b) => a.or(b),
                },
            })
    }
}

fn sum_optional(a: Option<i64>, b: Option<i64>) -> Option<i64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a + b),
        (a, b) => a.or(b),
    }
}

/// A part of a route travelled with a single transport mode
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier of the section
    pub id: String,
    /// Section type, e.g. `vehicle` or `pedestrian`
    #[serde(rename = "type")]
    pub section_type: String,
    /// Where and when the section starts
    pub departure: Departure,
    /// Where and when the section ends
    pub arrival: Departure,
    /// Duration and length
    #[serde(default)]
    pub summary: Summary,
    /// Flexible-polyline encoded geometry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polyline: Option<String>,
    /// Transport used on this section
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
    /// Operating agency, for transit sections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agency: Option<Agency>,
}

/// Departure or arrival of a section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Departure {
    /// Timestamp in RFC 3339 format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// The place
    pub place: Place,
}

/// A place, possibly a transit station
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Place type. The list may grow; unknown values must be tolerated.
    #[serde(rename = "type")]
    pub place_type: String,
    /// Position used for route calculation
    pub location: Waypoint,
    /// Position originally given in the request, if it differs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_location: Option<Waypoint>,
    /// Location name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Index of the request waypoint this place corresponds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoint: Option<u32>,
    /// Station identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Platform name or number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Duration and length of a section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Duration in seconds
    pub duration: i64,
    /// Length in meters
    pub length: i64,
    /// Duration without traffic, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_duration: Option<i64>,
    /// Duration under typical traffic, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typical_duration: Option<i64>,
    /// Estimated energy consumption in kWh
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumption: Option<f64>,
}

/// Transport information for a section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Transport {
    /// Transport mode, e.g. `car`
    pub mode: String,
}

/// Information about a transit agency
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Agency {
    /// Unique code; the same agency on different sections shares it
    pub id: String,
    /// Human-readable name of the operator
    pub name: String,
    /// Agency website
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Agency icon URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
