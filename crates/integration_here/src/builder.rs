//! Route request validation and query construction

use domain::{ReturnAttribute, RouteRequest, Selection, WireToken};

use crate::error::RoutingError;
use crate::query::QueryParams;

/// Validate a route request and translate it into query parameters
///
/// Checks run in a fixed order and the first failure is returned; no
/// partial parameter set escapes on error.
///
/// # Errors
///
/// Returns a validation variant of [`RoutingError`] when the transport mode
/// is not a valid selection, spans are requested without the polyline
/// return attribute, or an avoid feature, routing mode or traffic mode holds
/// unrecognised text.
pub fn build_query(request: &RouteRequest) -> Result<QueryParams, RoutingError> {
    let transport_mode = request
        .transport_mode
        .wire_value()
        .ok_or(RoutingError::InvalidTransportMode)?;

    let mut params = QueryParams::new();

    let returns = if request.return_attributes.is_empty() {
        ReturnAttribute::Summary.as_str().to_string()
    } else {
        join_tokens(&request.return_attributes)
    };
    params.append("return", returns);

    if let Some(departure_time) = request.departure_time.as_deref().filter(|t| !t.is_empty()) {
        params.append("departureTime", departure_time);
    }

    params.append("transportMode", transport_mode);
    params.append("origin", request.origin.to_query_value());
    params.append("destination", request.destination.to_query_value());
    for via in &request.via {
        params.append("via", via.to_query_value());
    }

    if !request.spans.is_empty() {
        if !request.requests_return(ReturnAttribute::Polyline) {
            return Err(RoutingError::SpansRequirePolyline);
        }
        params.append("spans", join_tokens(&request.spans));
    }

    let mut avoided = Vec::with_capacity(request.avoid_features.len());
    for feature in &request.avoid_features {
        match feature {
            Selection::Valid(feature) => avoided.push(feature.as_str()),
            Selection::Unspecified => {}
            Selection::Invalid(raw) => return Err(RoutingError::InvalidAvoidArea(raw.clone())),
        }
    }
    if !avoided.is_empty() {
        params.append("avoid[features]", avoided.join(","));
    }

    match &request.routing_mode {
        Selection::Valid(mode) => params.append("routingMode", mode.as_str()),
        Selection::Unspecified => {}
        Selection::Invalid(raw) => return Err(RoutingError::InvalidRoutingMode(raw.clone())),
    }

    match &request.traffic_mode {
        Selection::Valid(mode) => params.append("trafficMode", mode.as_str()),
        Selection::Unspecified => {}
        Selection::Invalid(raw) => return Err(RoutingError::InvalidTrafficMode(raw.clone())),
    }

    if let Some(ev) = &request.ev {
        for (name, value) in ev.to_query_pairs() {
            params.append(name, value);
        }
    }

    Ok(params)
}

fn join_tokens<T: WireToken>(values: &[T]) -> String {
    values
        .iter()
        .map(WireToken::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
