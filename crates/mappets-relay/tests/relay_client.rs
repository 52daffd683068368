//! Integration tests for `RelayClient` using wiremock HTTP mocks.
//!
//! Every test stands up its own server, so no real relay traffic is made.

use std::time::Duration;

use mappets_core::{FailureReason, Payload, SubmissionOutcome};
use mappets_relay::{Encoding, NotificationChannel, RelayClient};
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RELAY_PATH: &str = "/ajax/equipo@mappets.com.ar";

fn test_client(server_uri: &str) -> RelayClient {
    RelayClient::new(
        &format!("{server_uri}{RELAY_PATH}"),
        "mappets-test/0.1",
        None,
    )
    .expect("client construction should not fail")
}

fn deletion_payload() -> Payload {
    Payload::new()
        .with("_subject", "Solicitud de eliminacion de datos personales")
        .with("email", "user@example.com")
        .with("message", "Hola equipo Mappets,")
}

#[tokio::test]
async fn json_payload_is_posted_as_json_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RELAY_PATH))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "_subject": "Solicitud de eliminacion de datos personales",
            "email": "user@example.com",
            "message": "Hola equipo Mappets,"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": "true"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.send(&deletion_payload(), Encoding::Json).await;

    assert_eq!(outcome, SubmissionOutcome::Success);
}

#[tokio::test]
async fn multipart_payload_carries_one_part_per_field() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RELAY_PATH))
        .and(header("accept", "application/json"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"commerce_name\""))
        .and(body_string_contains("Veterinaria Palermo"))
        .and(body_string_contains("name=\"latitude\""))
        .and(body_string_contains("-34.6037000"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let payload = Payload::new()
        .with("commerce_name", "Veterinaria Palermo")
        .with("latitude", "-34.6037000")
        .with("longitude", "-58.3815000");

    let client = test_client(&server.uri());
    let outcome = client.send(&payload, Encoding::Multipart).await;

    assert!(outcome.is_success(), "expected Success, got: {outcome:?}");
}

#[tokio::test]
async fn server_error_is_reported_as_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RELAY_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.send(&deletion_payload(), Encoding::Json).await;

    assert_eq!(
        outcome,
        SubmissionOutcome::Failure {
            reason: FailureReason::Rejected { status: 500 }
        }
    );
}

#[tokio::test]
async fn client_error_status_is_reported_as_rejection() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(RELAY_PATH))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({"success": "false"})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.send(&deletion_payload(), Encoding::Json).await;

    assert!(
        matches!(
            outcome,
            SubmissionOutcome::Failure {
                reason: FailureReason::Rejected { status: 422 }
            }
        ),
        "expected Rejected(422), got: {outcome:?}"
    );
}

#[tokio::test]
async fn rejection_is_not_retried() {
    let server = MockServer::start().await;

    // `expect(1)` is verified when the server drops at the end of the test.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let outcome = client.send(&deletion_payload(), Encoding::Json).await;

    assert!(!outcome.is_success());
}

#[tokio::test]
async fn unreachable_relay_is_reported_as_transport_failure() {
    // Bind then release an ephemeral port so nothing is listening on it.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        format!("http://{addr}")
    };

    let client = test_client(&uri);
    let outcome = client.send(&deletion_payload(), Encoding::Json).await;

    assert!(
        matches!(
            outcome,
            SubmissionOutcome::Failure {
                reason: FailureReason::Transport(_)
            }
        ),
        "expected Transport failure, got: {outcome:?}"
    );
}

#[tokio::test]
async fn configured_timeout_is_reported_as_transport_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = RelayClient::new(
        &format!("{}{RELAY_PATH}", server.uri()),
        "mappets-test/0.1",
        Some(Duration::from_millis(50)),
    )
    .expect("client construction should not fail");
    let outcome = client.send(&deletion_payload(), Encoding::Json).await;

    assert!(
        matches!(
            outcome,
            SubmissionOutcome::Failure {
                reason: FailureReason::Transport(_)
            }
        ),
        "expected Transport failure on timeout, got: {outcome:?}"
    );
}
