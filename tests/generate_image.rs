//! End-to-end tests for the generate-image endpoint.

use std::io::Cursor;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use reelshot::config::ServiceConfig;
use reelshot::http::HttpServer;
use tokio::net::TcpListener;

mod common;
use common::MockResponse;

const ROUND_JSON: &str = r#"{"win": 1234.5, "math_result": {"reelMatrix": [[[1, 2], [3, 4]]]}}"#;

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(16, 16, image::Rgba([200, 40, 40, 255]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageOutputFormat::Png).unwrap();
    buf.into_inner()
}

/// Spawn the service against the given mock upstreams; returns its address.
async fn start_service(history: SocketAddr, assets: SocketAddr) -> SocketAddr {
    let mut config = ServiceConfig::default();
    config.upstream.history_base_url = format!("http://{}", history);
    config.upstream.assets_base_url = format!("http://{}", assets);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    addr
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

#[tokio::test]
async fn end_to_end_round_renders_a_png() {
    let history = common::start_mock_upstream(|path| async move {
        assert_eq!(path, "/api/history/v3/casinos/1/sessions/S1/rounds/R1");
        MockResponse::json(ROUND_JSON)
    })
    .await;
    let assets = common::start_mock_upstream(|path| async move {
        assert!(path.starts_with("/demo/expose/assets/img/"));
        MockResponse::png(tiny_png())
    })
    .await;

    let service = start_service(history, assets).await;
    let res = client()
        .get(format!("http://{}/generate-image/S1/R1/demo/img.png", service))
        .send()
        .await
        .expect("service unreachable");

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers().get("content-type").unwrap().to_str().unwrap(),
        "image/png"
    );

    let body = res.bytes().await.unwrap();
    let img = image::load_from_memory(&body).expect("body should be a decodable PNG");
    // 2x2 matrix at the default 100px cell.
    assert_eq!((img.width(), img.height()), (200, 200));
}

#[tokio::test]
async fn failed_symbols_fall_back_to_placeholders() {
    let history =
        common::start_mock_upstream(|_| async move { MockResponse::json(ROUND_JSON) }).await;
    // Symbols 3 and 4 are missing from the asset host.
    let assets = common::start_mock_upstream(|path: String| async move {
        if path.ends_with("/3.png") || path.ends_with("/4.png") {
            MockResponse::status(404)
        } else {
            MockResponse::png(tiny_png())
        }
    })
    .await;

    let service = start_service(history, assets).await;
    let res = client()
        .get(format!("http://{}/generate-image/S1/R1/demo/img.png", service))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200, "partial symbol failure must not 500");
    let body = res.bytes().await.unwrap();
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!((img.width(), img.height()), (200, 200));
}

#[tokio::test]
async fn blank_session_id_is_rejected_without_upstream_calls() {
    let hits = Arc::new(AtomicU32::new(0));
    let h = hits.clone();
    let history = common::start_mock_upstream(move |_| {
        let h = h.clone();
        async move {
            h.fetch_add(1, Ordering::SeqCst);
            MockResponse::json(ROUND_JSON)
        }
    })
    .await;
    let assets =
        common::start_mock_upstream(|_| async move { MockResponse::png(tiny_png()) }).await;

    let service = start_service(history, assets).await;
    let res = client()
        .get(format!("http://{}/generate-image/%20/R1/demo/img.png", service))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body = res.text().await.unwrap();
    assert!(body.contains("sessionId, roundId, gameName"));
    assert_eq!(hits.load(Ordering::SeqCst), 0, "no upstream call expected");
}

#[tokio::test]
async fn round_without_reel_matrix_is_a_client_error() {
    let history =
        common::start_mock_upstream(|_| async move { MockResponse::json(r#"{"win": 10}"#) }).await;
    let asset_hits = Arc::new(AtomicU32::new(0));
    let h = asset_hits.clone();
    let assets = common::start_mock_upstream(move |_| {
        let h = h.clone();
        async move {
            h.fetch_add(1, Ordering::SeqCst);
            MockResponse::png(tiny_png())
        }
    })
    .await;

    let service = start_service(history, assets).await;
    let res = client()
        .get(format!("http://{}/generate-image/S1/R1/demo/img.png", service))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body = res.text().await.unwrap();
    assert!(body.contains("reelMatrix"));
    assert_eq!(asset_hits.load(Ordering::SeqCst), 0, "compositor must not run");
}

#[tokio::test]
async fn history_failure_surfaces_as_server_error() {
    let history =
        common::start_mock_upstream(|_| async move { MockResponse::status(503) }).await;
    let assets =
        common::start_mock_upstream(|_| async move { MockResponse::png(tiny_png()) }).await;

    let service = start_service(history, assets).await;
    let res = client()
        .get(format!("http://{}/generate-image/S1/R1/demo/img.png", service))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 500);
    let body = res.text().await.unwrap();
    assert!(body.starts_with("Error generating image:"));
    assert!(body.contains("Failed to fetch round info"));
}
