use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hwwatch_rust_core::clients::TelegramClient;
use hwwatch_rust_core::WatchError;

#[tokio::test]
async fn posts_send_message_to_bot_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/botbot-token/sendMessage"))
        .and(body_json(json!({
            "chat_id": "12345",
            "text": "Status changed for submission \"proj1\". Работа взята на проверку ревьюером.",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = TelegramClient::with_base_url(
        server.uri(),
        "bot-token".to_string(),
        Duration::from_secs(5),
    );
    client
        .send_message(
            "12345",
            "Status changed for submission \"proj1\". Работа взята на проверку ревьюером.",
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn non_2xx_maps_to_delivery_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({
                "ok": false,
                "description": "Forbidden: bot was blocked by the user",
            })),
        )
        .mount(&server)
        .await;

    let client = TelegramClient::with_base_url(
        server.uri(),
        "bot-token".to_string(),
        Duration::from_secs(5),
    );
    let err = client.send_message("12345", "hello").await.unwrap_err();
    match err {
        WatchError::Delivery(msg) => assert!(msg.contains("403"), "msg: {msg}"),
        other => panic!("expected Delivery, got {other:?}"),
    }
}
