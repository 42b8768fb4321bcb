//! Integration tests for the webhook notifier

use serde_json::json;
use tickerwatch::alerts::{AlertKind, AlertMessage, AlertNotifier, WebhookNotifier};
use tickerwatch::error::MonitorError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn publish_posts_subject_and_message() {
    let server = MockServer::start().await;
    let alert = AlertMessage::new("BTC-USDT", 50000.5, 75.3251, AlertKind::Overbought);

    Mock::given(method("POST"))
        .and(path("/alerts"))
        .and(body_json(json!({
            "subject": "Price Monitor Alert",
            "message": "🚨 BTC-USDT Alert!\nPrice: $50000.5\nRSI: 75.33 (Overbought)"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new(format!("{}/alerts", server.uri()));
    notifier.publish(&alert).await.expect("publish succeeds");
}

#[tokio::test]
async fn publish_maps_error_status_to_notify_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/alerts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let notifier = WebhookNotifier::new(format!("{}/alerts", server.uri()));
    let alert = AlertMessage::new("BTC-USDT", 42000.0, 22.0, AlertKind::Oversold);
    let err = notifier.publish(&alert).await.unwrap_err();
    assert!(matches!(err, MonitorError::NotifyFailed(_)));
}

#[tokio::test]
async fn publish_maps_unreachable_target_to_notify_failed() {
    // Port 1 is never bound in the test environment
    let notifier = WebhookNotifier::new("http://127.0.0.1:1/alerts");
    let alert = AlertMessage::new("BTC-USDT", 42000.0, 22.0, AlertKind::Oversold);
    let err = notifier.publish(&alert).await.unwrap_err();
    assert!(matches!(err, MonitorError::NotifyFailed(_)));
}
