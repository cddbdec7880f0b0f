#![allow(clippy::unwrap_used)]
// Integration tests for `HttpGateway` and `Backend` using wiremock.

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use panelkit_api::{Backend, Error, Gateway, HttpGateway, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, HttpGateway) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let gateway = HttpGateway::with_client(reqwest::Client::new(), base_url);
    (server, gateway)
}

// ── Raw invoke ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_invoke_without_args_posts_empty_object() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/get_wifi_status"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let value = gateway.invoke("get_wifi_status", None).await.unwrap();
    assert_eq!(value, json!(true));
}

#[tokio::test]
async fn test_invoke_empty_body_is_null() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/enable_bluetooth"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = gateway.invoke("enable_bluetooth", None).await.unwrap();
    assert_eq!(value, serde_json::Value::Null);
}

#[tokio::test]
async fn test_rejection_uses_error_body() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/wifi_scanning"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "wpa_supplicant not running" })),
        )
        .mount(&server)
        .await;

    let err = gateway.invoke("wifi_scanning", None).await.unwrap_err();
    match err {
        Error::Rejected {
            command,
            status,
            message,
        } => {
            assert_eq!(command, "wifi_scanning");
            assert_eq!(status, Some(500));
            assert_eq!(message, "wpa_supplicant not running");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_rejection_falls_back_to_plain_body() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/get_brightness"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = gateway.invoke("get_brightness", None).await.unwrap_err();
    assert!(
        matches!(err, Error::Rejected { ref message, .. } if message == "upstream down"),
        "got: {err:?}"
    );
}

#[tokio::test]
async fn test_unknown_command_maps_404() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/get_moon_phase"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gateway.invoke("get_moon_phase", None).await.unwrap_err();
    assert!(err.is_not_found(), "got: {err:?}");
}

#[tokio::test]
async fn test_forbidden_maps_unauthorized() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/change_pin"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let err = gateway.invoke("change_pin", None).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_invalid_json_is_deserialization_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/get_known_networks"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let err = gateway.invoke("get_known_networks", None).await.unwrap_err();
    match err {
        Error::Deserialization { command, body, .. } => {
            assert_eq!(command, "get_known_networks");
            assert_eq!(body, "{not json");
        }
        other => panic!("expected Deserialization, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    let transport = TransportConfig {
        timeout: Duration::from_millis(200),
        ..TransportConfig::default()
    };
    let gateway = HttpGateway::new(Url::parse(&server.uri()).unwrap(), &transport).unwrap();

    Mock::given(method("POST"))
        .and(path("/invoke/wifi_scanning"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "wireless_network": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = gateway.invoke("wifi_scanning", None).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { .. }), "got: {err:?}");
}

// ── Typed backend over HTTP ─────────────────────────────────────────

#[tokio::test]
async fn test_backend_known_networks_over_http() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/get_known_networks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "known_network": [
                { "network_id": "0", "ssid": "Home", "flags": "[CURRENT]" },
                { "network_id": "2", "ssid": "Office5G", "flags": "" }
            ]
        })))
        .mount(&server)
        .await;

    let backend = Backend::new(Arc::new(gateway));
    let reply = backend.known_networks().await.unwrap();

    let ssids: Vec<&str> = reply.known_network.iter().map(|k| k.ssid.as_str()).collect();
    assert_eq!(ssids, vec!["Home", "Office5G"]);
}

#[tokio::test]
async fn test_backend_set_brightness_sends_value() {
    let (server, gateway) = setup().await;

    Mock::given(method("POST"))
        .and(path("/invoke/set_brightness"))
        .and(body_json(json!({ "value": 40 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .expect(1)
        .mount(&server)
        .await;

    let backend = Backend::new(Arc::new(gateway));
    backend.set_brightness(40).await.unwrap();
}
