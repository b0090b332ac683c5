//! Response decoding

use domain::{ErrorResponse, RouteResponse};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{ResponseError, RoutingError};

/// Decode a raw response into routes or a structured error
///
/// Success statuses decode the route schema; every other status decodes the
/// error schema and is returned as [`RoutingError::Response`], keeping the
/// raw body alongside. Malformed JSON in either case is
/// [`RoutingError::Decode`].
///
/// # Errors
///
/// Returns [`RoutingError::Response`] for non-success statuses and
/// [`RoutingError::Decode`] when the body does not match the expected schema.
pub fn decode_response(status: StatusCode, body: &[u8]) -> Result<RouteResponse, RoutingError> {
    if status.is_success() {
        let response: RouteResponse =
            serde_json::from_slice(body).map_err(|source| RoutingError::Decode { source })?;

        if response.is_empty() {
            warn!(notices = response.notices.len(), "No routes found");
        }
        debug!(count = response.routes.len(), "Routes decoded");
        return Ok(response);
    }

    let response: ErrorResponse =
        serde_json::from_slice(body).map_err(|source| RoutingError::Decode { source })?;

    warn!(
        status = status.as_u16(),
        code = %response.code,
        correlation_id = %response.correlation_id,
        "Routing request rejected"
    );

    Err(ResponseError {
        status: status.as_u16(),
        response,
        http_body: String::from_utf8_lossy(body).into_owned(),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTES_JSON: &str = r#"{
        "routes": [{
            "id": "route-1",
            "sections": [{
                "id": "section-1",
                "type": "vehicle",
                "departure": { "place": { "type": "place", "location": { "lat": 57.707752, "lng": 11.949767 } } },
                "arrival": { "place": { "type": "place", "location": { "lat": 59.337492, "lng": 18.063672 } } },
                "summary": { "duration": 243, "length": 1206, "baseDuration": 136 }
            }]
        }]
    }"#;

    #[test]
    fn test_decode_success() {
        let response = decode_response(StatusCode::OK, ROUTES_JSON.as_bytes()).unwrap();
        assert_eq!(response.routes.len(), 1);
        assert_eq!(response.routes[0].id, "route-1");
        assert_eq!(response.routes[0].sections[0].summary.duration, 243);
    }

    #[test]
    fn test_decode_success_with_non_200_status() {
        let response = decode_response(StatusCode::ACCEPTED, ROUTES_JSON.as_bytes()).unwrap();
        assert_eq!(response.routes.len(), 1);
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_response(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, RoutingError::Decode { .. }));
    }

    #[test]
    fn test_decode_error_body() {
        let body = br#"{"title":"Mocked Error","status":400,"code":"E605001","cause":"bad","action":"","correlationId":"abc"}"#;
        let err = decode_response(StatusCode::BAD_REQUEST, body).unwrap_err();

        let RoutingError::Response(response_error) = err else {
            panic!("expected response error, got {err:?}");
        };
        assert_eq!(response_error.status, 400);
        assert_eq!(response_error.response.title, "Mocked Error");
        assert_eq!(response_error.response.correlation_id, "abc");
        assert_eq!(response_error.http_body.as_bytes(), body);
    }

    #[test]
    fn test_decode_error_body_not_matching_schema_keeps_raw_text() {
        let body = br#"{"error":"Unauthorized","error_description":"apiKey invalid"}"#;
        let err = decode_response(StatusCode::UNAUTHORIZED, body).unwrap_err();

        let RoutingError::Response(response_error) = err else {
            panic!("expected response error, got {err:?}");
        };
        assert!(response_error.response.title.is_empty());
        assert!(response_error.http_body.contains("apiKey invalid"));
    }

    #[test]
    fn test_decode_malformed_error_body() {
        let err =
            decode_response(StatusCode::BAD_GATEWAY, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RoutingError::Decode { .. }));
    }
}
