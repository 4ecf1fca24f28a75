//! End-to-end tests against the real router.
//!
//! Each test serves `create_router()` on an ephemeral localhost port and talks
//! to it over HTTP with reqwest.
//!
//! Run with: cargo test --test api_tests

use reqwest::StatusCode;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use yorku_planner::create_router;

/// Running server plus the means to stop it
struct TestServer {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, create_router())
                .with_graceful_shutdown(async move {
                    let _ = rx.await;
                })
                .await;
        });

        Self {
            base_url: format!("http://{addr}"),
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

#[tokio::test]
async fn hello_returns_greeting() {
    let server = TestServer::start().await;
    let resp = reqwest::get(server.url("/api/hello")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "got {content_type}");
    assert_eq!(
        resp.text().await.unwrap(),
        "Hello from YorkU Course Planner Backend!"
    );

    server.stop().await;
}

#[tokio::test]
async fn health_returns_ok() {
    let server = TestServer::start().await;
    let resp = reqwest::get(server.url("/api/health")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["cache-control"], "no-store");
    assert_eq!(resp.text().await.unwrap(), "OK");

    server.stop().await;
}

#[tokio::test]
async fn hello_is_cacheable() {
    let server = TestServer::start().await;
    let resp = reqwest::get(server.url("/api/hello")).await.unwrap();

    assert_eq!(resp.headers()["cache-control"], "public, max-age=60");

    server.stop().await;
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for path in ["/api/hello", "/api/health"] {
        let mut bodies = Vec::new();
        for _ in 0..5 {
            let resp = client.get(server.url(path)).send().await.unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
            bodies.push(resp.text().await.unwrap());
        }
        assert!(bodies.windows(2).all(|w| w[0] == w[1]), "{path}: {bodies:?}");
    }

    server.stop().await;
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    for path in ["/api/unknown", "/hello", "/health", "/"] {
        let resp = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{path}");
    }

    // Server keeps serving afterwards
    let resp = client.get(server.url("/api/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let resp = client.post(server.url("/api/hello")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = client.delete(server.url("/api/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let resp = client.get(server.url("/api/hello")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    server.stop().await;
}

#[tokio::test]
async fn every_response_carries_a_fresh_request_id() {
    let server = TestServer::start().await;
    let client = reqwest::Client::new();

    let mut ids = Vec::new();
    for path in ["/api/hello", "/api/hello", "/api/unknown"] {
        let resp = client.get(server.url(path)).send().await.unwrap();
        let id = resp.headers()["x-request-id"].to_str().unwrap().to_string();
        ids.push(Uuid::parse_str(&id).unwrap());
    }

    assert_ne!(ids[0], ids[1]);
    assert_ne!(ids[1], ids[2]);

    server.stop().await;
}
