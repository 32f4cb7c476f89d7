// ABOUTME: Integration tests for OuraClient against a mock HTTP server
// ABOUTME: Covers request shape, status-to-error mapping, and local date validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 oura-client contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use oura_client::{DateRangeEndpoint, OuraApiError, OuraClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client pointed at the mock server, base URL with the trailing slash
/// the production constant carries.
fn test_client(server: &MockServer, token: &str) -> OuraClient {
    OuraClient::with_base_url(token, format!("{}/", server.uri()))
}

#[tokio::test]
async fn test_daily_activity_request_shape_and_passthrough() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/daily_activity"))
        .and(query_param("start_date", "2023-01-01"))
        .and(query_param("end_date", "2023-01-31"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, "abc123");
    let body = client
        .get_daily_activity("2023-01-01", "2023-01-31")
        .await
        .unwrap();

    assert_eq!(body, json!({"data": []}));
}

#[tokio::test]
async fn test_rate_limited_response_maps_to_rate_limit_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/daily_activity"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = test_client(&server, "abc123");
    let err = client
        .get_daily_activity("2023-01-01", "2023-01-31")
        .await
        .unwrap_err();

    assert!(matches!(err, OuraApiError::RateLimitExceeded));
}

#[tokio::test]
async fn test_client_error_bands_map_to_their_kinds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sleep"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/workout"))
        .respond_with(ResponseTemplate::new(426))
        .mount(&server)
        .await;

    let client = test_client(&server, "abc123");

    let err = client.get_sleep("2023-01-01", "2023-01-31").await.unwrap_err();
    assert!(matches!(err, OuraApiError::QueryParameterValidation));

    let err = client
        .get_workout("2023-01-01", "2023-01-31")
        .await
        .unwrap_err();
    assert!(matches!(err, OuraApiError::MinimumAppVersion));
}

#[tokio::test]
async fn test_server_error_band_maps_to_internal_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = test_client(&server, "abc123");
    let err = client
        .get_session("2023-01-01", "2023-01-31")
        .await
        .unwrap_err();

    assert!(matches!(err, OuraApiError::InternalServer));
}

#[tokio::test]
async fn test_unmapped_status_is_surfaced_not_swallowed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/tag"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server, "abc123");
    let err = client.get_tag("2023-01-01", "2023-01-31").await.unwrap_err();

    assert!(matches!(err, OuraApiError::UnexpectedStatus { status: 404 }));
}

#[tokio::test]
async fn test_malformed_start_date_fails_before_any_request() {
    let server = MockServer::start().await;
    let client = test_client(&server, "abc123");

    let err = client
        .get_daily_sleep("2023/01/01", "2023-01-31")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OuraApiError::InvalidDateFormat { param: "start date" }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_end_date_fails_before_any_request() {
    let server = MockServer::start().await;
    let client = test_client(&server, "abc123");

    let err = client
        .get_daily_sleep("2023-01-01", "2023-1-31")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        OuraApiError::InvalidDateFormat { param: "end date" }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_heart_rate_passes_datetimes_through_unvalidated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/heartrate"))
        .and(query_param("start_datetime", "2023-01-01T00:00:00"))
        .and(query_param("end_datetime", "2023-01-02T00:00:00"))
        .and(header("Authorization", "Bearer abc123"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": [{"bpm": 62}]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, "abc123");
    let body = client
        .get_heart_rate("2023-01-01T00:00:00", "2023-01-02T00:00:00")
        .await
        .unwrap();

    assert_eq!(body, json!({"data": [{"bpm": 62}]}));
}

#[tokio::test]
async fn test_every_date_ranged_endpoint_hits_its_own_path() {
    let server = MockServer::start().await;

    for endpoint in DateRangeEndpoint::ALL {
        Mock::given(method("GET"))
            .and(path(format!("/{}", endpoint.path())))
            .and(query_param("start_date", "2023-02-01"))
            .and(query_param("end_date", "2023-02-28"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server, "abc123");
    for endpoint in DateRangeEndpoint::ALL {
        client
            .fetch_by_date_range(endpoint, "2023-02-01", "2023-02-28")
            .await
            .unwrap();
    }
}
