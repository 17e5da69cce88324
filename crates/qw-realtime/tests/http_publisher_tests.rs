//! HTTP publisher tests against a mocked provider endpoint.

use wiremock::matchers::{method, path, query_param_contains};
use wiremock::{Mock, MockServer, ResponseTemplate};

use qw_realtime::http::{HttpPublisher, ProviderConfig};
use qw_realtime::{RealtimeError, RealtimePublisher};

fn config_for(server: &MockServer) -> ProviderConfig {
    ProviderConfig {
        base_url: server.uri(),
        app_id: "app-42".to_string(),
        key: "test-key".to_string(),
        secret: "test-secret".to_string(),
    }
}

#[tokio::test]
async fn test_publish_hits_events_endpoint_with_auth() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps/app-42/events"))
        .and(query_param_contains("auth_key", "test-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let publisher = HttpPublisher::new(config_for(&server)).unwrap();
    let result = publisher
        .publish(
            qw_common::channels::QUEUE_UPDATES,
            qw_common::events::CENTERS_UPDATED,
            serde_json::json!({"centers": []}),
        )
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_provider_error_is_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/apps/app-42/events"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad signature"))
        .mount(&server)
        .await;

    let publisher = HttpPublisher::new(config_for(&server)).unwrap();
    let err = publisher
        .publish(
            qw_common::channels::WAIT_TIMES,
            qw_common::events::WAIT_CHANGED,
            serde_json::json!({"centerId": "c-1"}),
        )
        .await
        .unwrap_err();

    match err {
        RealtimeError::Provider { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad signature");
        }
        other => panic!("unexpected error: {other}"),
    }
}
