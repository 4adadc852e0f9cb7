use chrono::NaiveDate;
use earnings_core::calendar::error::FetchError;
use earnings_core::filter::entity::Filter;
use earnings_core::test_utils::MockEarningsFeed;
use earnings_manager::calendar::CalendarService;
use earnings_manager::filter::FilterStore;
use earnings_store::MemoryFilterRepository;
use serde_json::json;
use std::sync::Arc;

fn march_first() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn upstream_rows() -> Vec<serde_json::Value> {
    vec![
        json!({"symbol": "AAPL", "name": "Apple Inc.", "marketCap": "$2,818,277,093,480", "time": "time-after-hours"}),
        json!({"symbol": "GOOG", "name": "Alphabet Inc.", "marketCap": "$1,748,384,460,000", "time": "time-pre-market"}),
        json!({"symbol": "MSFT", "name": "Microsoft Corporation", "marketCap": "$3,049,622,127,853", "time": "time-not-supplied"}),
    ]
}

async fn setup(feed: Arc<MockEarningsFeed>) -> (Arc<CalendarService>, Arc<FilterStore>) {
    let store = FilterStore::load(Arc::new(MemoryFilterRepository::new()))
        .await
        .unwrap();
    let service = CalendarService::new(feed, store.clone());
    (service, store)
}

fn symbols(rows: &[earnings_core::calendar::entity::CalendarRow]) -> Vec<&str> {
    rows.iter().map(|r| r.symbol.as_str()).collect()
}

#[tokio::test]
async fn test_catalog_to_query_scenario() {
    let feed = Arc::new(MockEarningsFeed::with_rows(vec![
        json!({"symbol": "AAPL", "name": "Apple Inc.", "marketCap": "$2.8T", "time": "time-after-hours"}),
        json!({"symbol": "GOOG", "name": "Alphabet Inc.", "marketCap": "$1.7T", "time": "time-pre-market"}),
    ]));
    let (service, store) = setup(feed.clone()).await;

    store.add(Filter::new("tech", ["AAPL", "MSFT"]).unwrap()).await.unwrap();
    let listed = store.list().await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "tech");
    assert_eq!(listed[0].symbols, vec!["AAPL", "MSFT"]);

    let rows = service.query(march_first(), Some("tech")).await.unwrap();
    assert_eq!(symbols(&rows), vec!["AAPL"]);
    assert_eq!(rows[0].fields["name"], json!("Apple Inc."));
    assert_eq!(feed.requests().await, vec![march_first()]);
}

#[tokio::test]
async fn test_matching_filter_keeps_only_members() {
    let feed = Arc::new(MockEarningsFeed::with_rows(upstream_rows()));
    let (service, store) = setup(feed).await;
    store.add(Filter::new("big", ["MSFT", "AAPL"]).unwrap()).await.unwrap();

    let rows = service.query(march_first(), Some("big")).await.unwrap();
    assert_eq!(symbols(&rows), vec!["AAPL", "MSFT"]);
}

#[tokio::test]
async fn test_no_filter_returns_all_rows_in_order() {
    let feed = Arc::new(MockEarningsFeed::with_rows(upstream_rows()));
    let (service, _) = setup(feed).await;

    let rows = service.query(march_first(), None).await.unwrap();
    assert_eq!(symbols(&rows), vec!["AAPL", "GOOG", "MSFT"]);
}

#[tokio::test]
async fn test_unknown_filter_name_returns_all_rows() {
    let feed = Arc::new(MockEarningsFeed::with_rows(upstream_rows()));
    let (service, store) = setup(feed).await;
    store.add(Filter::new("stale", ["AAPL"]).unwrap()).await.unwrap();
    store.delete(&["stale"]).await.unwrap();

    let rows = service.query(march_first(), Some("stale")).await.unwrap();
    assert_eq!(rows.len(), 3);
}

#[tokio::test]
async fn test_missing_rows_degrade_to_empty() {
    let feed = Arc::new(MockEarningsFeed::new(json!({"data": null, "message": "No data"})));
    let (service, _) = setup(feed.clone()).await;
    assert!(service.query(march_first(), None).await.unwrap().is_empty());

    feed.respond_with(json!({"status": {"rCode": 400}})).await;
    assert!(service.query(march_first(), None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_failure_propagates() {
    let feed = Arc::new(MockEarningsFeed::with_rows(upstream_rows()));
    let (service, _) = setup(feed.clone()).await;
    feed.fail_with("connection reset").await;

    let err = service.query(march_first(), None).await.unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
    assert!(service.fetch_raw(march_first()).await.is_err());
}

#[tokio::test]
async fn test_fetch_raw_passes_envelope_through() {
    let envelope = json!({"data": {"asOf": "Fri, Mar 1, 2024", "rows": upstream_rows()}, "message": null});
    let feed = Arc::new(MockEarningsFeed::new(envelope.clone()));
    let (service, _) = setup(feed).await;

    assert_eq!(service.fetch_raw(march_first()).await.unwrap(), envelope);
}
