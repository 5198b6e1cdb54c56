use motiv_client::ReqwestFetcher;
use motiv_core::error::AppError;
use motiv_core::traits::Fetcher;

use crate::common::{closed_port_url, serve_once};

#[tokio::test]
async fn fetch_returns_body_and_sends_browser_user_agent() {
    let (base_url, server) = serve_once(
        "200 OK",
        "text/html; charset=utf-8",
        "<html><body>Hello</body></html>",
    )
    .await;
    let url = format!("{base_url}/careers");

    let fetcher = ReqwestFetcher::new().unwrap();
    let page = fetcher.fetch(&url).await.unwrap();

    assert_eq!(page.url, url);
    assert_eq!(page.raw_html, "<html><body>Hello</body></html>");

    let request = server.await.unwrap();
    assert!(request.head.starts_with("get /careers http/1.1"));
    assert!(
        request
            .head
            .contains("user-agent: mozilla/5.0 (windows nt 10.0; win64; x64)")
    );
}

#[tokio::test]
async fn fetch_404_is_fetch_error() {
    let (base_url, _server) = serve_once("404 Not Found", "text/html", "gone").await;

    let fetcher = ReqwestFetcher::new().unwrap();
    let err = fetcher.fetch(&base_url).await.unwrap_err();

    match err {
        AppError::FetchError(msg) => assert!(msg.contains("HTTP 404"), "{msg}"),
        other => panic!("expected FetchError, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_500_is_fetch_error() {
    let (base_url, _server) = serve_once("500 Internal Server Error", "text/plain", "").await;

    let fetcher = ReqwestFetcher::new().unwrap();
    let err = fetcher.fetch(&base_url).await.unwrap_err();
    assert!(err.to_string().contains("HTTP 500"));
}

#[tokio::test]
async fn fetch_connection_refused_is_fetch_error() {
    let url = closed_port_url().await;

    let fetcher = ReqwestFetcher::new().unwrap();
    let err = fetcher.fetch(&url).await.unwrap_err();
    assert!(matches!(err, AppError::FetchError(_)));
}
