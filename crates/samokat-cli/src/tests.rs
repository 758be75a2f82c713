use clap::Parser;
use samokat_core::{AppConfig, ConfigError};
use samokat_showcase::ShowcaseError;
use samokat_telegram::NotifyError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

const TOKEN: &str = "123456:test-token";

fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        telegram_api_token: TOKEN.to_string(),
        telegram_chat_id: "42".to_string(),
        min_discount: 20,
        lat: 55.751_244,
        lon: 37.618_423,
        log_level: "info".to_string(),
        request_timeout_secs: 5,
        user_agent: "samokat-test/0.1".to_string(),
        showcase_base_url: base_url.to_string(),
        telegram_base_url: base_url.to_string(),
    }
}

async fn mount_showcase(server: &MockServer, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/showcase/showcases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": {
                "a": { "name": "Сыр", "price": 25_000, "oldPrice": 50_000 },
                "b": { "name": "Молоко", "price": 8_900, "oldPrice": 11_900 },
                "c": { "name": "Хлеб", "price": 5_000, "oldPrice": 5_200 }
            }
        })))
        .expect(expected)
        .mount(server)
        .await;
}

async fn mount_telegram(server: &MockServer, expected_text: &str, expected: u64) {
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/getMe")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "id": 1, "is_bot": true, "first_name": "Deals", "username": "deals_bot" }
        })))
        .expect(expected)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .and(body_partial_json(json!({ "chat_id": 42, "text": expected_text })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ok": true,
            "result": { "message_id": 9 }
        })))
        .expect(expected)
        .mount(server)
        .await;
}

#[test]
fn no_flags_is_a_full_run() {
    let cli = Cli::try_parse_from(["samokat-deals"]).expect("expected valid cli args");
    assert!(!cli.dry_run);
}

#[test]
fn parses_dry_run_flag() {
    let cli =
        Cli::try_parse_from(["samokat-deals", "--dry-run"]).expect("expected valid cli args");
    assert!(cli.dry_run);
}

#[test]
fn rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["samokat-deals", "--retry"]).is_err());
}

#[tokio::test]
async fn build_report_ranks_and_formats() {
    let server = MockServer::start().await;
    mount_showcase(&server, 1).await;

    let report = run::build_report(&test_config(&server.uri()))
        .await
        .expect("report should build");
    assert_eq!(report, "Сыр 250 р., 50%\nМолоко 89 р., 25%\n");
}

#[tokio::test]
async fn run_and_notify_delivers_ranked_report() {
    let server = MockServer::start().await;
    mount_showcase(&server, 1).await;
    mount_telegram(&server, "Сыр 250 р., 50%\nМолоко 89 р., 25%\n", 1).await;

    let result = run::run_and_notify(&test_config(&server.uri())).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn run_and_notify_sends_empty_message_when_nothing_qualifies() {
    let server = MockServer::start().await;
    mount_showcase(&server, 1).await;
    mount_telegram(&server, "", 1).await;

    let mut config = test_config(&server.uri());
    config.min_discount = 90;

    let result = run::run_and_notify(&config).await;
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn zero_coordinate_aborts_before_any_request() {
    let server = MockServer::start().await;
    mount_showcase(&server, 0).await;
    mount_telegram(&server, "", 0).await;

    let mut config = test_config(&server.uri());
    config.lon = 0.0;

    let err = run::run_and_notify(&config).await.unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<ShowcaseError>(),
            Some(ShowcaseError::Config(ConfigError::ZeroCoordinate(var))) if var == "SAMOKAT_LON"
        ),
        "expected ZeroCoordinate(SAMOKAT_LON), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_chat_id_aborts_before_any_request() {
    let server = MockServer::start().await;
    mount_showcase(&server, 0).await;
    mount_telegram(&server, "", 0).await;

    let mut config = test_config(&server.uri());
    config.telegram_chat_id = "chat".to_string();

    let err = run::run_and_notify(&config).await.unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<NotifyError>(),
            Some(NotifyError::Config(ConfigError::InvalidEnvVar { var, .. })) if var == "TELEGRAM_CHAT_ID"
        ),
        "expected InvalidEnvVar(TELEGRAM_CHAT_ID), got: {err:?}"
    );
}

#[tokio::test]
async fn showcase_failure_skips_telegram() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/showcase/showcases"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_telegram(&server, "", 0).await;

    let err = run::run_and_notify(&test_config(&server.uri()))
        .await
        .unwrap_err();
    assert!(
        matches!(
            err.downcast_ref::<ShowcaseError>(),
            Some(ShowcaseError::UnexpectedStatus { status: 500, .. })
        ),
        "expected UnexpectedStatus(500), got: {err:?}"
    );
}
