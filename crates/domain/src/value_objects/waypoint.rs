//! Waypoint value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic coordinate used as origin, destination, via stop or
/// resolved place location
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Waypoint {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    /// Elevation above mean sea level in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elv: Option<f32>,
}

impl Waypoint {
    /// Create a waypoint without elevation
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            elv: None,
        }
    }

    /// Attach an elevation in meters
    #[must_use]
    pub const fn with_elevation(mut self, elv: f32) -> Self {
        self.elv = Some(elv);
        self
    }

    /// Render as a `lat,lng` query value
    ///
    /// Uses the shortest round-trip float representation. Elevation is
    /// never part of the query value.
    #[must_use]
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elv {
            Some(elv) => write!(f, "{},{} ({elv}m)", self.lat, self.lng),
            None => write!(f, "{},{}", self.lat, self.lng),
        }
    }
}
