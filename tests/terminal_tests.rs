mod support;

use std::time::Duration;

use chrono::{TimeZone, Utc};
use ledgerlens::adapter::outbound::terminal::{TerminalBridge, TerminalCredentials};
use ledgerlens::domain::deal::DealType;
use ledgerlens::domain::window::HistoryWindow;
use ledgerlens::error::Error;
use ledgerlens::port::outbound::deals::DealSource;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::deals::two_trades;
use support::env::ledgerlens;

fn bridge(server: &MockServer) -> TerminalBridge {
    let credentials = TerminalCredentials::parse("MetaQuotes-Demo", "5012345", "secret").unwrap();
    TerminalBridge::new(server.uri(), credentials, Duration::from_secs(5)).unwrap()
}

fn window() -> HistoryWindow {
    let to = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
    HistoryWindow::ending_at(to, 30)
}

#[tokio::test]
async fn bridge_posts_credentials_and_window() {
    let server = MockServer::start().await;
    let window = window();
    Mock::given(method("POST"))
        .and(path("/history/deals"))
        .and(body_partial_json(json!({
            "server": "MetaQuotes-Demo",
            "login": 5_012_345,
            "password": "secret",
            "from": window.from.timestamp(),
            "to": window.to.timestamp(),
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(two_trades())))
        .expect(1)
        .mount(&server)
        .await;

    let deals = bridge(&server).fetch(&window).await.unwrap();

    assert_eq!(deals.len(), 2);
    assert_eq!(deals[0].kind, DealType::Buy);
    assert_eq!(deals[1].kind, DealType::Sell);
    assert!(deals.iter().all(|d| d.is_opening()));
}

#[tokio::test]
async fn bridge_rejection_is_a_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/history/deals"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid account"))
        .mount(&server)
        .await;

    let err = bridge(&server).fetch(&window()).await.unwrap_err();

    match err {
        Error::Connection(msg) => assert!(msg.contains("invalid account"), "{msg}"),
        other => panic!("Expected connection error, got {other}"),
    }
}

#[tokio::test]
async fn malformed_bridge_payload_is_a_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/history/deals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "deals": "pending" })))
        .mount(&server)
        .await;

    let err = bridge(&server).fetch(&window()).await.unwrap_err();

    match err {
        Error::Connection(msg) => assert!(msg.contains("invalid deal list"), "{msg}"),
        other => panic!("Expected connection error, got {other}"),
    }
}

#[tokio::test]
async fn unreachable_bridge_is_a_connection_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let credentials = TerminalCredentials::parse("Demo", "1", "pw").unwrap();
    let bridge = TerminalBridge::new(uri, credentials, Duration::from_secs(2)).unwrap();

    let err = bridge.fetch(&window()).await.unwrap_err();
    assert!(matches!(err, Error::Connection(_)));
}

#[tokio::test(flavor = "multi_thread")]
async fn summary_reads_deals_from_bridge() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/history/deals"))
        .and(body_partial_json(json!({ "login": 42 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(two_trades())))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = ledgerlens(&dir);
    cmd.env("LEDGERLENS_TERMINAL_URL", server.uri()).args([
        "summary",
        "--server",
        "Demo",
        "--login",
        "42",
        "--password",
        "pw",
    ]);

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();

    assert!(output.status.success());
    let summary: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["totalTrades"], 2);
    assert_eq!(summary["currency"], "USD");
}

#[tokio::test(flavor = "multi_thread")]
async fn failed_session_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let mut cmd = ledgerlens(&dir);
    cmd.env("LEDGERLENS_TERMINAL_URL", server.uri())
        .env("LEDGERLENS_TERMINAL_PASSWORD", "pw")
        .args(["summary", "--server", "Demo", "--login", "42"]);

    let output = tokio::task::spawn_blocking(move || cmd.output())
        .await
        .unwrap()
        .unwrap();

    assert!(!output.status.success());
    let record: Value = serde_json::from_slice(&output.stdout).unwrap();
    let error = record["error"].as_str().unwrap();
    assert!(error.starts_with("terminal connection failed"), "{error}");
}
