//! Value Objects - Immutable, identity-less routing primitives

mod attributes;
mod modes;
mod selection;
mod waypoint;

pub use attributes::{AreaFeature, ReturnAttribute, SpanAttribute};
pub use modes::{RoutingMode, TrafficMode, TransportMode};
pub use selection::{Selection, WireToken};
pub use waypoint::Waypoint;
