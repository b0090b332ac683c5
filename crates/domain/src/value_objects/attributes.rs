//! Avoid-area features, return attributes and span attributes

use serde::{Deserialize, Serialize};
use std::fmt;

use super::selection::WireToken;

/// Road or area category the router should avoid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaFeature {
    /// Roads closed for part of the year
    SeasonalClosure,
    /// Roads requiring a toll
    TollRoad,
    /// Motorways and other controlled-access highways
    ControlledAccessHighway,
    /// Ferry connections
    Ferry,
    /// Car shuttle trains
    CarShuttleTrain,
    /// Tunnels
    Tunnel,
    /// Unpaved roads
    DirtRoad,
    /// Sharp or otherwise difficult turns
    DifficultTurns,
}

impl AreaFeature {
    /// Every variant in declaration order
    pub const ALL: [Self; 8] = [
        Self::SeasonalClosure,
        Self::TollRoad,
        Self::ControlledAccessHighway,
        Self::Ferry,
        Self::CarShuttleTrain,
        Self::Tunnel,
        Self::DirtRoad,
        Self::DifficultTurns,
    ];
}

impl WireToken for AreaFeature {
    fn as_str(&self) -> &'static str {
        match self {
            Self::SeasonalClosure => "seasonalClosure",
            Self::TollRoad => "tollRoad",
            Self::ControlledAccessHighway => "controlledAccessHighway",
            Self::Ferry => "ferry",
            Self::CarShuttleTrain => "carShuttleTrain",
            Self::Tunnel => "tunnel",
            Self::DirtRoad => "dirtRoad",
            Self::DifficultTurns => "difficultTurns",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|feature| feature.as_str() == token)
    }
}

/// Category of data to include in the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnAttribute {
    /// Encoded section geometry
    Polyline,
    /// Maneuver actions
    Actions,
    /// Human-readable instructions for each action
    Instructions,
    /// Duration and length per section
    Summary,
    /// Summary restricted to travel, excluding waiting time
    TravelSummary,
    /// Machine-learned duration estimate
    MlDuration,
    /// Duration under typical traffic
    TypicalDuration,
    /// Turn-by-turn navigation actions
    TurnByTurnActions,
    /// Elevation data in the polyline
    Elevation,
    /// Handle for later route import
    RouteHandle,
    /// Via waypoints passed through without stopping
    Passthrough,
    /// Traffic incidents along the route
    Incidents,
    /// Routing zones such as environmental zones
    RoutingZones,
    /// Truck road types
    TruckRoadTypes,
    /// Toll cost information
    Tolls,
}

impl ReturnAttribute {
    /// Every variant in declaration order
    pub const ALL: [Self; 15] = [
        Self::Polyline,
        Self::Actions,
        Self::Instructions,
        Self::Summary,
        Self::TravelSummary,
        Self::MlDuration,
        Self::TypicalDuration,
        Self::TurnByTurnActions,
        Self::Elevation,
        Self::RouteHandle,
        Self::Passthrough,
        Self::Incidents,
        Self::RoutingZones,
        Self::TruckRoadTypes,
        Self::Tolls,
    ];
}

impl WireToken for ReturnAttribute {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Polyline => "polyline",
            Self::Actions => "actions",
            Self::Instructions => "instructions",
            Self::Summary => "summary",
            Self::TravelSummary => "travelSummary",
            Self::MlDuration => "mlDuration",
            Self::TypicalDuration => "typicalDuration",
            Self::TurnByTurnActions => "turnByTurnActions",
            Self::Elevation => "elevation",
            Self::RouteHandle => "routeHandle",
            Self::Passthrough => "passthrough",
            Self::Incidents => "incidents",
            Self::RoutingZones => "routingZones",
            Self::TruckRoadTypes => "truckRoadTypes",
            Self::Tolls => "tolls",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == token)
    }
}

/// Per-span annotation of the polyline
///
/// Only honoured when [`ReturnAttribute::Polyline`] is requested as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanAttribute {
    WalkAttributes,
    StreetAttributes,
    CarAttributes,
    TruckAttributes,
    Length,
    Duration,
    BaseDuration,
    TypicalDuration,
    CountryCode,
    FunctionalClass,
    RouteNumbers,
    SpeedLimit,
    MaxSpeed,
    DynamicSpeedInfo,
    SegmentId,
    SegmentRef,
    Consumption,
    Names,
    StateCode,
    Incidents,
    Notices,
    TollSystems,
    TruckRoadTypes,
}

impl SpanAttribute {
    /// Every variant in declaration order
    pub const ALL: [Self; 23] = [
        Self::WalkAttributes,
        Self::StreetAttributes,
        Self::CarAttributes,
        Self::TruckAttributes,
        Self::Length,
        Self::Duration,
        Self::BaseDuration,
        Self::TypicalDuration,
        Self::CountryCode,
        Self::FunctionalClass,
        Self::RouteNumbers,
        Self::SpeedLimit,
        Self::MaxSpeed,
        Self::DynamicSpeedInfo,
        Self::SegmentId,
        Self::SegmentRef,
        Self::Consumption,
        Self::Names,
        Self::StateCode,
        Self::Incidents,
        Self::Notices,
        Self::TollSystems,
        Self::TruckRoadTypes,
    ];
}

impl WireToken for SpanAttribute {
    fn as_str(&self) -> &'static str {
        match self {
            Self::WalkAttributes => "walkAttributes",
            Self::StreetAttributes => "streetAttributes",
            Self::CarAttributes => "carAttributes",
            Self::TruckAttributes => "truckAttributes",
            Self::Length => "length",
            Self::Duration => "duration",
            Self::BaseDuration => "baseDuration",
            Self::TypicalDuration => "typicalDuration",
            Self::CountryCode => "countryCode",
            Self::FunctionalClass => "functionalClass",
            Self::RouteNumbers => "routeNumbers",
            Self::SpeedLimit => "speedLimit",
            Self::MaxSpeed => "maxSpeed",
            Self::DynamicSpeedInfo => "dynamicSpeedInfo",
            Self::SegmentId => "segmentId",
            Self::SegmentRef => "segmentRef",
            Self::Consumption => "consumption",
            Self::Names => "names",
            Self::StateCode => "stateCode",
            Self::Incidents => "incidents",
            Self::Notices => "notices",
            Self::TollSystems => "tollSystems",
            Self::TruckRoadTypes => "truckRoadTypes",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == token)
    }
}

impl fmt::Display for AreaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ReturnAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SpanAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AreaFeature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Invalid avoid area feature: {s}"))
    }
}

impl std::str::FromStr for ReturnAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Invalid return attribute: {s}"))
    }
}

impl std::str::FromStr for SpanAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Invalid span attribute: {s}"))
    }
}
