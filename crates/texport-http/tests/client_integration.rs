//! End-to-end classification tests against a local mock server.

use std::time::Duration;

use wiremock::matchers::{body_string, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use texport_http::{
    ApiClient, ApiRequest, ClientConfig, Credential, HttpMethod, PayloadEncoding,
    CODE_CONNECTION_REFUSED, CODE_READ_TIMEOUT,
};

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(
        ClientConfig::new(base_url),
        Credential::new("alice", "alice@example.com"),
    )
    .unwrap()
}

/// A base address on a port nothing listens on.
fn unreachable_base() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn upload_reports_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(201).set_body_string("ok"))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let request = ApiRequest::new(HttpMethod::Post, "/upload").file("brick.png", vec![0u8; 5120]);
    let response = client.do_request(&request).await;

    assert_eq!(response.status.code, 201);
    assert_eq!(response.status.message, "[201] Created");
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn http_error_passes_through_with_body_diagnostics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let response = client
        .do_request(&ApiRequest::new(HttpMethod::Get, "/missing"))
        .await;

    assert_eq!(response.status.code, 404);
    assert!(response.status.message.starts_with("[404] Not found"));
    assert!(response.status.message.contains("Response Content:\nnot here"));
}

#[tokio::test]
async fn unlisted_status_gets_generated_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/teapot"))
        .respond_with(ResponseTemplate::new(418))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let response = client
        .do_request(&ApiRequest::new(HttpMethod::Get, "/teapot"))
        .await;

    assert_eq!(response.status.code, 418);
    assert_eq!(response.status.message, "Status [418]");
}

#[tokio::test]
async fn authorization_reflects_credential_at_call_time() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .and(header("Authorization", "Bearer fresh"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client(&server.uri());
    client.credential_mut().set_bearer_token("fresh");

    // The stale caller-supplied header must be overwritten, not duplicated
    let request = ApiRequest::new(HttpMethod::Get, "/ping").header("Authorization", "Bearer stale");
    let response = client.do_request(&request).await;

    assert_eq!(response.status.code, 200);
    assert_eq!(request.headers["Authorization"], "Bearer stale");
}

#[tokio::test]
async fn connection_refused_yields_synthetic_code() {
    let client = client(&unreachable_base());
    let response = client
        .do_request(&ApiRequest::new(HttpMethod::Get, "/ping"))
        .await;

    assert_eq!(response.status.code, CODE_CONNECTION_REFUSED);
    assert_eq!(response.status.message, "Connection refused");
    assert!(response.headers.is_empty());
    assert!(response.payload.is_empty());
}

#[tokio::test]
async fn slow_server_yields_timeout_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let request =
        ApiRequest::new(HttpMethod::Get, "/slow").timeout(Duration::from_millis(50));
    let response = client.do_request(&request).await;

    assert_eq!(response.status.code, CODE_READ_TIMEOUT);
    assert_eq!(response.status.message, "ReadTimeout");
}

#[tokio::test]
async fn check_connection_treats_http_error_as_connected() {
    // Nothing mounted: the mock server answers 404, which still proves the
    // host is reachable
    let server = MockServer::start().await;
    let client = client(&server.uri());

    assert_eq!(client.check_connection().await, "Connected successfully");
}

#[tokio::test]
async fn check_connection_reports_failure_when_unreachable() {
    let client = client(&unreachable_base());
    assert_eq!(client.check_connection().await, "Connection error");
}

#[tokio::test]
async fn raw_encoding_sends_payload_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/textures/7"))
        .and(body_string("raw-bytes"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = ApiClient::new(
        ClientConfig::new(server.uri()).payload_encoding(PayloadEncoding::Raw),
        Credential::new("alice", "alice@example.com"),
    )
    .unwrap();

    let request =
        ApiRequest::new(HttpMethod::Put, "/textures/7").bytes(b"raw-bytes".to_vec());
    let response = client.do_request(&request).await;

    assert_eq!(response.status.code, 200);
}

#[tokio::test]
async fn multipart_encoding_carries_field_and_file_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(body_string_contains("name=\"texture\""))
        .and(body_string_contains("filename=\"brick.png\""))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    let request =
        ApiRequest::new(HttpMethod::Post, "/upload").file("brick.png", b"pixels".to_vec());
    let response = client.do_request(&request).await;

    assert_eq!(response.status.code, 201);
}

#[tokio::test]
async fn delete_never_carries_a_payload() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/textures/7"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client(&server.uri());
    // Payload on a DELETE is ignored by dispatch
    let request =
        ApiRequest::new(HttpMethod::Delete, "/textures/7").bytes(b"ignored".to_vec());
    let response = client.do_request(&request).await;

    assert_eq!(response.status.code, 200);
}
