use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use shortly_engine::{
    ClientSettings, FailureKind, ReqwestShorteningClient, ShorteningClient, ShortenResponse,
};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ReqwestShorteningClient {
    let settings = ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    };
    ReqwestShorteningClient::new(settings).expect("client builds")
}

#[tokio::test]
async fn submit_posts_url_and_returns_short_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": "https://example.com/very/long/path" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "short_url": "https://sho.rt/abc123" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client
        .submit("https://example.com/very/long/path")
        .await
        .expect("submit ok");

    assert_eq!(
        response,
        ShortenResponse {
            short_url: "https://sho.rt/abc123".to_string()
        }
    );
}

#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "short_url": "https://sho.rt/x" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: format!("{}/", server.uri()),
        ..ClientSettings::default()
    };
    let client = ReqwestShorteningClient::new(settings).expect("client builds");

    let response = client.submit("https://example.com").await.expect("submit ok");
    assert_eq!(response.short_url, "https://sho.rt/x");
}

#[tokio::test]
async fn submit_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "Could not save to database" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit("https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn submit_fails_on_missing_short_url_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "link": "https://sho.rt/x" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit("https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn submit_fails_on_non_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit("https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn submit_fails_on_empty_short_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "short_url": "" })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit("https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn submit_times_out_on_slow_service() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_json(json!({ "short_url": "https://sho.rt/slow" })),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    };
    let client = ReqwestShorteningClient::new(settings).expect("client builds");

    let err = client.submit("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn submit_makes_a_single_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .submit("https://example.com")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn submit_reports_network_error_when_service_is_down() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let base_url = format!("http://{}", listener.local_addr().expect("addr"));
    drop(listener);

    let settings = ClientSettings {
        base_url,
        ..ClientSettings::default()
    };
    let client = ReqwestShorteningClient::new(settings).expect("client builds");

    let err = client.submit("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn invalid_base_url_is_rejected_before_sending() {
    let settings = ClientSettings {
        base_url: "not a base url".to_string(),
        ..ClientSettings::default()
    };
    let client = ReqwestShorteningClient::new(settings).expect("client builds");

    let err = client.submit("https://example.com").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidEndpoint);
}

#[tokio::test]
async fn health_check_reports_service_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Server is running!" })))
        .mount(&server)
        .await;

    let healthy = client_for(&server).check_health().await.expect("probe ok");
    assert!(healthy);
}

#[tokio::test]
async fn health_check_reports_unhealthy_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let healthy = client_for(&server).check_health().await.expect("probe ok");
    assert!(!healthy);
}
