//! Domain layer for the HERE Routing API client
//!
//! Plain data types mirroring the Routing API v8 JSON schema, the closed
//! wire enums used in route queries, and the request value object.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::CurveError;
pub use value_objects::*;
