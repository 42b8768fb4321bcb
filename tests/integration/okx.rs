//! Integration tests for the OKX market data client

use serde_json::json;
use tickerwatch::error::MonitorError;
use tickerwatch::services::{MarketDataSource, OkxClient};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> OkxClient {
    OkxClient::with_client(server.uri(), reqwest::Client::new())
}

#[tokio::test]
async fn latest_price_parses_ticker_last_field() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/ticker"))
        .and(query_param("instId", "BTC-USDT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "0",
            "msg": "",
            "data": [{
                "instId": "BTC-USDT",
                "last": "50000.5",
                "askPx": "50001.0",
                "bidPx": "50000.0"
            }]
        })))
        .mount(&server)
        .await;

    let price = client_for(&server)
        .latest_price("BTC-USDT")
        .await
        .expect("quote succeeds");
    assert_eq!(price, 50000.5);
}

#[tokio::test]
async fn latest_price_rejects_exchange_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "51001",
            "msg": "Instrument ID does not exist",
            "data": []
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .latest_price("NOPE-USDT")
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::QuoteUnavailable { .. }));
}

#[tokio::test]
async fn latest_price_rejects_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .latest_price("BTC-USDT")
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::QuoteUnavailable { .. }));
}

#[tokio::test]
async fn latest_price_rejects_empty_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/ticker"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "0",
            "msg": "",
            "data": []
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .latest_price("BTC-USDT")
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::QuoteUnavailable { .. }));
}

#[tokio::test]
async fn latest_price_rejects_http_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/ticker"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .latest_price("BTC-USDT")
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::QuoteUnavailable { .. }));
}

#[tokio::test]
async fn recent_closes_reverses_newest_first_candles() {
    let server = MockServer::start().await;
    // Newest-first, close at index 4
    Mock::given(method("GET"))
        .and(path("/api/v5/market/candles"))
        .and(query_param("instId", "BTC-USDT"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "0",
            "msg": "",
            "data": [
                ["1700000120000", "102.5", "104.0", "101.0", "103.0", "5", "0", "0", "1"],
                ["1700000060000", "101.5", "103.0", "100.0", "102.0", "4", "0", "0", "1"],
                ["1700000000000", "100.5", "102.0", "99.0", "101.0", "3", "0", "0", "1"]
            ]
        })))
        .mount(&server)
        .await;

    let closes = client_for(&server)
        .recent_closes("BTC-USDT", 3)
        .await
        .expect("candle fetch succeeds");
    assert_eq!(closes, vec![101.0, 102.0, 103.0]);
}

#[tokio::test]
async fn recent_closes_maps_http_failure_to_candle_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/candles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recent_closes("BTC-USDT", 30)
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::CandleFetchFailed { .. }));
}

#[tokio::test]
async fn recent_closes_rejects_exchange_error_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/candles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "50011",
            "msg": "Rate limit reached",
            "data": []
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recent_closes("BTC-USDT", 30)
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::CandleFetchFailed { .. }));
}

#[tokio::test]
async fn recent_closes_rejects_short_candle_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/market/candles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": "0",
            "msg": "",
            "data": [["1700000000000", "100.5"]]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .recent_closes("BTC-USDT", 30)
        .await
        .unwrap_err();
    assert!(matches!(err, MonitorError::CandleFetchFailed { .. }));
}
