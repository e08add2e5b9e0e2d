//! Integration tests for the HTTP transport and the layers above it.
//!
//! These tests run a real HTTP exchange against a local mock server. The
//! transport blocks, so every call is moved onto tokio's blocking pool.

use repofetch_api_client::{
    ClientConfig, HttpTransport, RepoClient, RepoRecord, Request, RequestOptions, ServiceError,
    Transport, TransportConfig, TransportError,
};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ONE_REPO: &str = r#"[{"id":1,"name":"X","description":"d"}]"#;

async fn blocking<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

fn client_for(server: &MockServer) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.base_url = server.uri();
    config.timeout = Some(Duration::from_secs(5));
    config
}

#[tokio::test(flavor = "multi_thread")]
async fn send_returns_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/chizidegit/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_REPO))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/users/chizidegit/repos", server.uri());
    let response = blocking(move || HttpTransport::new()?.send(Request::new(url)))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(response.body(), ONE_REPO.as_bytes());
}

#[tokio::test(flavor = "multi_thread")]
async fn send_passes_through_error_statuses() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("missing"))
        .mount(&server)
        .await;

    let url = format!("{}/anything", server.uri());
    let response = blocking(move || HttpTransport::new()?.send(Request::new(url)))
        .await
        .unwrap();

    assert_eq!(response.status(), 404);
    assert!(!response.is_success());
    assert_eq!(response.body(), b"missing");
}

#[tokio::test(flavor = "multi_thread")]
async fn send_attaches_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_exists("x-request-id"))
        .and(header("user-agent", "repofetch-test/1.0"))
        .and(header("x-default", "always"))
        .and(header("accept", "text/plain"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/", server.uri());
    let response = blocking(move || {
        let transport = HttpTransport::with_config(&TransportConfig {
            user_agent: "repofetch-test/1.0".into(),
            default_headers: vec![("X-Default".into(), "always".into())],
            ..TransportConfig::default()
        })?;
        let options = RequestOptions {
            headers: vec![("Accept".into(), "text/plain".into())],
        };
        transport.send(Request::with_options(url, options))
    })
    .await
    .unwrap();

    assert_eq!(response.status(), 204);
}

#[tokio::test(flavor = "multi_thread")]
async fn configured_timeout_is_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let url = format!("{}/slow", server.uri());
    let err = blocking(move || {
        let transport = HttpTransport::with_config(&TransportConfig {
            timeout: Some(Duration::from_millis(200)),
            ..TransportConfig::default()
        })?;
        transport.send(Request::new(url))
    })
    .await
    .unwrap_err();

    assert!(matches!(err, TransportError::Timeout(_)), "got {err:?}");
}

#[test]
fn refused_connection_is_connection_failed() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let err = HttpTransport::new()
        .unwrap()
        .send(Request::new(format!("http://127.0.0.1:{port}/")))
        .unwrap_err();

    assert!(matches!(err, TransportError::ConnectionFailed(_)), "got {err:?}");
}

#[test]
fn garbage_response_is_protocol_error() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let server = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 1024];
        let _ = stream.read(&mut buf);
        stream.write_all(b"this is not http\r\n\r\n").unwrap();
    });

    let err = HttpTransport::new()
        .unwrap()
        .send(Request::new(format!("http://{addr}/")))
        .unwrap_err();
    server.join().unwrap();

    assert!(matches!(err, TransportError::ProtocolError(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn client_lists_repositories() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/chizidegit/repos"))
        .and(header("accept", "application/vnd.github+json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONE_REPO))
        .expect(2)
        .mount(&server)
        .await;

    let config = client_for(&server);
    let (first, second, calls) = blocking(move || {
        let client = RepoClient::with_config(config).unwrap();
        let first = client.repos().list("chizidegit");
        let second = client.repos().list("chizidegit");
        (first, second, client.stats().calls)
    })
    .await;

    let first = first.unwrap();
    assert_eq!(
        first,
        vec![RepoRecord {
            id: 1,
            name: "X".into(),
            description: Some("d".into()),
        }]
    );
    assert_eq!(first, second.unwrap());
    assert_eq!(calls, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn client_surfaces_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/ghost/repos"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#))
        .mount(&server)
        .await;

    let config = client_for(&server);
    let err = blocking(move || RepoClient::with_config(config).unwrap().repos().list("ghost"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Status { status: 404, .. }), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn client_reports_decode_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>rate limited</html>"))
        .mount(&server)
        .await;

    let config = client_for(&server);
    let err = blocking(move || RepoClient::with_config(config).unwrap().repos().list("x"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::DecodeError(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn client_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer ghp_test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = client_for(&server);
    config.token = Some("ghp_test".into());
    let repos = blocking(move || RepoClient::with_config(config).unwrap().repos().list("me"))
        .await
        .unwrap();

    assert!(repos.is_empty());
}
