//! Integration tests for the routing client using wiremock
//!
//! These tests run the full request path (build, reqwest transport, decode)
//! against a mock HTTP server.

use std::time::Duration;

use domain::{
    AreaFeature, ReturnAttribute, RouteRequest, Selection, SpanAttribute, TransportMode,
    Waypoint,
};
use integration_here::{
    HereRoutingClient, RoutingConfig, RoutingError, RoutingService, TransportError,
};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const GOTHENBURG: Waypoint = Waypoint::new(57.707_752, 11.949_767);
const STOCKHOLM: Waypoint = Waypoint::new(59.337_492, 18.063_672);
const JONKOPING: Waypoint = Waypoint::new(57.782_614, 14.161_788);
const LINKOPING: Waypoint = Waypoint::new(58.410_807, 15.621_373);

/// Sample Routing API v8 response for testing
fn sample_route_response() -> serde_json::Value {
    serde_json::json!({
        "routes": [{
            "id": "6a0e1c2f-4f4d-4b8e-9a3e-2f8c2b7d1e01",
            "sections": [{
                "id": "section-1",
                "type": "vehicle",
                "departure": {
                    "time": "2024-03-01T08:00:00+01:00",
                    "place": {
                        "type": "place",
                        "location": { "lat": 57.707_76, "lng": 11.949_77 },
                        "originalLocation": { "lat": 57.707_752, "lng": 11.949_767 },
                        "waypoint": 0
                    }
                },
                "arrival": {
                    "time": "2024-03-01T12:52:11+01:00",
                    "place": {
                        "type": "place",
                        "location": { "lat": 59.337_49, "lng": 18.063_67 },
                        "waypoint": 1
                    }
                },
                "summary": {
                    "duration": 17_531,
                    "length": 469_584,
                    "baseDuration": 16_987
                },
                "polyline": "BG2znmkDi89wZ9L",
                "transport": { "mode": "car" }
            }]
        }]
    })
}

/// Create a test client configured to use the mock server
fn create_test_client(mock_server: &MockServer) -> HereRoutingClient {
    let config = RoutingConfig {
        base_url: mock_server.uri(),
        ..RoutingConfig::for_testing()
    };
    #[allow(clippy::expect_used)]
    HereRoutingClient::new(&config).expect("Failed to create client")
}

fn minimal_request() -> RouteRequest {
    RouteRequest::new(GOTHENBURG, STOCKHOLM, TransportMode::Car)
}

/// Setup a mock for the /routes endpoint with the given response
async fn setup_routes_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

/// Raw query strings of all requests the server received
async fn received_queries(mock_server: &MockServer) -> Vec<String> {
    mock_server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.query().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn test_compute_routes_success() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_route_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let response = result.unwrap();
    assert_eq!(response.routes.len(), 1);

    let section = &response.routes[0].sections[0];
    assert_eq!(section.section_type, "vehicle");
    assert_eq!(section.summary.duration, 17_531);
    assert_eq!(section.summary.length, 469_584);
    assert_eq!(section.summary.base_duration, Some(16_987));
    assert_eq!(section.departure.place.waypoint, Some(0));
    assert_eq!(
        section.transport.as_ref().map(|t| t.mode.as_str()),
        Some("car")
    );
}

#[tokio::test]
async fn test_minimal_request_query() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_route_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await
        .unwrap();

    assert_eq!(
        received_queries(&mock_server).await,
        vec![
            "destination=59.337492%2C18.063672&origin=57.707752%2C11.949767\
             &return=summary&transportMode=car"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn test_via_waypoints_sent_in_order() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_route_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let request = minimal_request().via(JONKOPING).via(LINKOPING);
    client
        .compute_routes(&CancellationToken::new(), &request)
        .await
        .unwrap();

    let queries = received_queries(&mock_server).await;
    assert_eq!(queries.len(), 1);
    assert!(
        queries[0].contains("via=57.782614%2C14.161788&via=58.410807%2C15.621373"),
        "Unexpected query: {}",
        queries[0]
    );
}

#[tokio::test]
async fn test_avoid_features_and_spans() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(query_param("avoid[features]", "tollRoad,ferry"))
        .and(query_param("return", "polyline,summary"))
        .and(query_param("spans", "names,length"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_route_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = minimal_request()
        .avoid(AreaFeature::TollRoad)
        .avoid(Selection::<AreaFeature>::Unspecified)
        .avoid(AreaFeature::Ferry)
        .return_attribute(ReturnAttribute::Polyline)
        .return_attribute(ReturnAttribute::Summary)
        .span(SpanAttribute::Names)
        .span(SpanAttribute::Length);

    let result = client
        .compute_routes(&CancellationToken::new(), &request)
        .await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn test_api_key_appended() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(query_param("apiKey", "test-key"))
        .and(query_param("transportMode", "car"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_route_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = RoutingConfig {
        base_url: mock_server.uri(),
        ..RoutingConfig::for_testing()
    }
    .with_api_key("test-key");
    let client = HereRoutingClient::new(&config).unwrap();

    client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await
        .unwrap();

    let queries = received_queries(&mock_server).await;
    assert!(queries[0].ends_with("&apiKey=test-key"), "Unexpected query: {}", queries[0]);
}

#[tokio::test]
async fn test_empty_routes_is_not_an_error() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "notices": [{ "title": "Route calculation failed: Couldn't find a route.", "code": "couldNotMatchOrigin" }],
            "routes": []
        })),
    )
    .await;

    let client = create_test_client(&mock_server);
    let response = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await
        .unwrap();

    assert!(response.is_empty());
    assert_eq!(response.notices.len(), 1);
    assert_eq!(response.notices[0].code, "couldNotMatchOrigin");
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn test_error_response_carries_body() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "title": "Malformed request",
        "status": 400,
        "code": "E605001",
        "cause": "Error while parsing request: 'origin' is required",
        "action": "",
        "correlationId": "4199533b-6290-41db-8d79-edf4f4019a74"
    });
    setup_routes_mock(&mock_server, ResponseTemplate::new(400).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    let error = match result {
        Err(RoutingError::Response(error)) => error,
        other => panic!("Expected ResponseError, got: {other:?}"),
    };
    assert_eq!(error.status, 400);
    assert_eq!(error.response.title, "Malformed request");
    assert_eq!(error.response.code, "E605001");
    assert_eq!(
        error.response.correlation_id,
        "4199533b-6290-41db-8d79-edf4f4019a74"
    );
    assert!(error.http_body.contains("E605001"));
}

#[tokio::test]
async fn test_error_response_with_unknown_fields() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(401)
            .set_body_string(r#"{"error":"Unauthorized","error_description":"apiKey invalid"}"#),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    let error = match result {
        Err(RoutingError::Response(error)) => error,
        other => panic!("Expected ResponseError, got: {other:?}"),
    };
    assert_eq!(error.status, 401);
    assert!(error.response.title.is_empty());
    assert!(error.http_body.contains("apiKey invalid"));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("not json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    assert!(
        matches!(result, Err(RoutingError::Decode { .. })),
        "Expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_error_body() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(503).set_body_string("<html>Service Unavailable</html>"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    assert!(
        matches!(result, Err(RoutingError::Decode { .. })),
        "Expected Decode, got: {result:?}"
    );
}

#[tokio::test]
async fn test_validation_error_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_route_response()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let cancel = CancellationToken::new();

    let mut request = minimal_request();
    request.transport_mode = Selection::Unspecified;
    let result = client.compute_routes(&cancel, &request).await;
    assert!(matches!(result, Err(RoutingError::InvalidTransportMode)));

    let request = minimal_request().avoid(Selection::<AreaFeature>::parse("lavaField"));
    let result = client.compute_routes(&cancel, &request).await;
    assert!(
        matches!(&result, Err(RoutingError::InvalidAvoidArea(value)) if value == "lavaField"),
        "Expected InvalidAvoidArea, got: {result:?}"
    );

    let request = minimal_request().span(SpanAttribute::Names);
    let result = client.compute_routes(&cancel, &request).await;
    assert!(matches!(result, Err(RoutingError::SpansRequirePolyline)));
}

#[tokio::test]
async fn test_cancellation_aborts_request() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_route_response())
            .set_delay(Duration::from_secs(10)),
    )
    .await;

    let client = create_test_client(&mock_server);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let result = client.compute_routes(&cancel, &minimal_request()).await;
    assert!(
        matches!(result, Err(RoutingError::Transport(TransportError::Cancelled))),
        "Expected Cancelled, got: {result:?}"
    );
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    setup_routes_mock(
        &mock_server,
        ResponseTemplate::new(200)
            .set_body_json(sample_route_response())
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = RoutingConfig {
        base_url: mock_server.uri(),
        timeout_secs: 1,
        ..RoutingConfig::for_testing()
    };
    let client = HereRoutingClient::new(&config).unwrap();
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    assert!(
        matches!(
            result,
            Err(RoutingError::Transport(TransportError::Timeout { timeout_secs: 1 }))
        ),
        "Expected Timeout, got: {result:?}"
    );
    assert!(result.unwrap_err().is_retryable());
}

#[tokio::test]
async fn test_connection_refused() {
    // Reserve a free port, then release it so nothing listens there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = RoutingConfig {
        base_url: format!("http://{addr}"),
        ..RoutingConfig::for_testing()
    };
    let client = HereRoutingClient::new(&config).unwrap();
    let result = client
        .compute_routes(&CancellationToken::new(), &minimal_request())
        .await;

    assert!(
        matches!(
            result,
            Err(RoutingError::Transport(TransportError::ConnectionFailed(_)))
        ),
        "Expected ConnectionFailed, got: {result:?}"
    );
}
