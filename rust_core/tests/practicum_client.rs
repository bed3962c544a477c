use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hwwatch_rust_core::clients::PracticumClient;
use hwwatch_rust_core::WatchError;

fn client_for(server: &MockServer) -> PracticumClient {
    PracticumClient::with_endpoint(
        format!("{}/api/user_api/homework_statuses/", server.uri()),
        "secret-token".to_string(),
        Duration::from_secs(5),
    )
}

#[tokio::test]
async fn fetches_statuses_with_oauth_header_and_from_date() {
    let server = MockServer::start().await;
    let payload = json!({
        "homeworks": [{"homework_name": "proj1", "status": "approved"}],
        "current_date": 1000,
    });

    Mock::given(method("GET"))
        .and(path("/api/user_api/homework_statuses/"))
        .and(header("Authorization", "OAuth secret-token"))
        .and(query_param("from_date", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&payload))
        .expect(1)
        .mount(&server)
        .await;

    let got = client_for(&server).homework_statuses(1000).await.unwrap();
    assert_eq!(got, payload);
}

#[tokio::test]
async fn non_200_maps_to_endpoint_unavailable_with_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server).homework_statuses(1000).await.unwrap_err();
    match err {
        WatchError::EndpointUnavailable { status } => assert_eq!(status.as_u16(), 503),
        other => panic!("expected EndpointUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_maps_to_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = client_for(&server).homework_statuses(1000).await.unwrap_err();
    assert!(matches!(err, WatchError::Decode { .. }), "got {err:?}");
}

#[tokio::test]
async fn zero_from_date_falls_back_to_current_time() {
    let server = MockServer::start().await;

    // No fixed from_date matcher: the client substitutes "now" for zero, so
    // only assert the parameter is present and positive.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "homeworks": [],
            "current_date": 2000,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let got = client_for(&server).homework_statuses(0).await.unwrap();
    assert_eq!(got["current_date"], 2000);

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    let since: i64 = query
        .strip_prefix("from_date=")
        .and_then(|v| v.parse().ok())
        .expect("from_date should be a number");
    assert!(since > 0);
}
