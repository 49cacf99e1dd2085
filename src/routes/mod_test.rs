use super::*;

use axum::Json;
use axum::http::HeaderMap;

use crate::config::{ProxyTimeouts, ServerConfig};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn state_for(backend_url: &str) -> AppState {
    let config = ServerConfig {
        port: 0,
        backend_url: backend_url.to_owned(),
        timeouts: ProxyTimeouts { request_secs: 5, connect_secs: 1 },
    };
    AppState::new(&config).unwrap()
}

async fn fake_backend() -> String {
    let router = Router::new()
        .route(
            "/api/users",
            get(|| async {
                Json(serde_json::json!([
                    {"id": 1, "name": "Ada", "email": "ada@x.com"},
                    {"id": 2, "name": "Grace", "email": "grace@x.com"}
                ]))
            }),
        )
        .route("/api/broken", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route(
            "/api/echo",
            axum::routing::post(|headers: HeaderMap, body: String| async move {
                let host = headers
                    .get("host")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_owned();
                format!("{host}|{body}")
            }),
        );
    spawn(router).await
}

#[tokio::test]
async fn healthz_returns_ok() {
    let host = spawn(api_routes(state_for("http://127.0.0.1:9"))).await;
    let resp = reqwest::get(format!("{host}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn users_request_is_forwarded_verbatim() {
    let backend = fake_backend().await;
    let host = spawn(api_routes(state_for(&backend))).await;

    let resp = reqwest::get(format!("{host}/api/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&resp.text().await.unwrap()).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "Ada");
}

#[tokio::test]
async fn upstream_failure_status_passes_through() {
    let backend = fake_backend().await;
    let host = spawn(api_routes(state_for(&backend))).await;

    let resp = reqwest::get(format!("{host}/api/broken")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().await.unwrap(), "boom");
}

#[tokio::test]
async fn request_uses_backend_host_and_keeps_body() {
    let backend = fake_backend().await;
    let host = spawn(api_routes(state_for(&backend))).await;

    let resp = reqwest::Client::new()
        .post(format!("{host}/api/echo"))
        .body("hello")
        .send()
        .await
        .unwrap();
    let text = resp.text().await.unwrap();
    let backend_host = backend.trim_start_matches("http://");
    assert_eq!(text, format!("{backend_host}|hello"));
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let host = spawn(api_routes(state_for(&dead))).await;
    let resp = reqwest::get(format!("{host}/api/users")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
}

#[test]
fn state_keeps_backend_url() {
    let state = state_for("http://backend.test");
    assert_eq!(&*state.backend_url, "http://backend.test");
}
