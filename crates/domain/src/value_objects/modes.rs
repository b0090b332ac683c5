//! Transport, routing and traffic modes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::selection::WireToken;

/// Mode of transport used for route calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransportMode {
    /// Passenger car
    Car,
    /// Truck, honouring truck restrictions
    Truck,
    /// Walking
    Pedestrian,
}

impl WireToken for TransportMode {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Truck => "truck",
            Self::Pedestrian => "pedestrian",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "car" => Some(Self::Car),
            "truck" => Some(Self::Truck),
            "pedestrian" => Some(Self::Pedestrian),
            _ => None,
        }
    }
}

/// Optimisation target for the calculated route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoutingMode {
    /// Minimise travel time
    Fast,
    /// Minimise distance
    Short,
}

impl WireToken for RoutingMode {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Short => "short",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "fast" => Some(Self::Fast),
            "short" => Some(Self::Short),
            _ => None,
        }
    }
}

/// Whether live and historical traffic is taken into account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrafficMode {
    /// Use traffic information
    Default,
    /// Ignore traffic information
    Disabled,
}

impl WireToken for TrafficMode {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Disabled => "disabled",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token {
            "default" => Some(Self::Default),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TrafficMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Invalid transport mode: {s}"))
    }
}

impl std::str::FromStr for RoutingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Invalid routing mode: {s}"))
    }
}

impl std::str::FromStr for TrafficMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Invalid traffic mode: {s}"))
    }
}
