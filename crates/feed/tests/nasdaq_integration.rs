use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use chrono::NaiveDate;
use earnings_core::calendar::error::FetchError;
use earnings_core::calendar::port::EarningsFeed;
use earnings_core::config::FeedConfig;
use earnings_feed::NasdaqProvider;
use serde_json::{Value, json};
use std::collections::HashMap;
use tokio::net::TcpListener;

/// 模拟上游：回显收到的日期与 User-Agent
async fn calendar(Query(params): Query<HashMap<String, String>>, headers: HeaderMap) -> Json<Value> {
    let ua = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    Json(json!({
        "data": {
            "asOf": params.get("date"),
            "rows": [{"symbol": "AAPL", "name": "Apple Inc.", "marketCap": "$2.8T", "time": "time-after-hours"}]
        },
        "userAgent": ua
    }))
}

async fn unavailable() -> (StatusCode, Json<Value>) {
    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"message": "down"})))
}

async fn html() -> &'static str {
    "<html>Access Denied</html>"
}

/// 在随机端口启动模拟上游，返回基础地址
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/calendar", get(calendar))
        .route("/unavailable", get(unavailable))
        .route("/html", get(html));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn provider_for(url: String) -> NasdaqProvider {
    let config = FeedConfig {
        base_url: url,
        user_agent: "earnings-test-agent".to_string(),
        ..FeedConfig::default()
    };
    NasdaqProvider::new(&config).unwrap()
}

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

#[tokio::test]
async fn test_fetch_passes_date_and_headers() {
    let base = spawn_upstream().await;
    let provider = provider_for(format!("{}/calendar", base));

    let body = provider.fetch_calendar(march_first()).await.unwrap();

    assert_eq!(body["data"]["asOf"], json!("2024-03-01"));
    assert_eq!(body["data"]["rows"][0]["symbol"], json!("AAPL"));
    assert_eq!(body["userAgent"], json!("earnings-test-agent"));
}

#[tokio::test]
async fn test_non_success_status_is_fetch_error() {
    let base = spawn_upstream().await;
    let provider = provider_for(format!("{}/unavailable", base));

    let err = provider.fetch_calendar(march_first()).await.unwrap_err();
    assert!(matches!(err, FetchError::Status(503)), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_non_json_body_is_parse_error() {
    let base = spawn_upstream().await;
    let provider = provider_for(format!("{}/html", base));

    let err = provider.fetch_calendar(march_first()).await.unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "unexpected error: {:?}", err);
}

#[tokio::test]
async fn test_unreachable_upstream_is_network_error() {
    // 绑定后立即释放端口，保证连接被拒绝
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let provider = provider_for(format!("http://{}/calendar", addr));
    let err = provider.fetch_calendar(march_first()).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "unexpected error: {:?}", err);
}

#[test]
fn test_invalid_user_agent_is_rejected() {
    let config = FeedConfig {
        user_agent: "bad\nagent".to_string(),
        ..FeedConfig::default()
    };
    assert!(NasdaqProvider::new(&config).is_err());
}
