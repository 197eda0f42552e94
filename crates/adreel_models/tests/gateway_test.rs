mod test_utils;

use adreel_core::{ChatMessage, Storyboard};
use adreel_error::{AdreelErrorKind, ProviderErrorKind};
use adreel_interface::PromptGateway;
use adreel_models::{MOCK_REPLY, OllamaGateway};
use std::time::Duration;
use test_utils::{closed_url, serve, serve_silent};

fn storyboard_conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("Produce a JSON STORYBOARD with exactly 4 shots."),
        ChatMessage::user("Product details: a lamp"),
    ]
}

#[tokio::test]
async fn test_unreachable_model_returns_mock_storyboard() {
    let gateway =
        OllamaGateway::new(closed_url("/api/chat"), "phi3", Duration::from_secs(5)).unwrap();

    let reply = gateway.send(&storyboard_conversation(), 0.4).await.unwrap();
    let storyboard: Storyboard = serde_json::from_str(&reply).unwrap();
    assert_eq!(storyboard.len(), 4);
    assert_eq!(storyboard.shots[0].shot_type.as_deref(), Some("Wide shot"));
}

#[tokio::test]
async fn test_unreachable_model_returns_plain_mock_without_storyboard_instruction() {
    let gateway =
        OllamaGateway::new(closed_url("/api/chat"), "phi3", Duration::from_secs(5)).unwrap();

    // "storyboard" only in a user message does not count
    let messages = vec![
        ChatMessage::system("You are a critical film editor."),
        ChatMessage::user("Draft Storyboard: {}"),
    ];
    let reply = gateway.send(&messages, 0.3).await.unwrap();
    assert_eq!(reply, MOCK_REPLY);
}

#[tokio::test]
async fn test_timeout_returns_mock() {
    let base = serve_silent().await;
    let gateway = OllamaGateway::new(
        format!("{}/api/chat", base),
        "phi3",
        Duration::from_millis(200),
    )
    .unwrap();

    let reply = gateway.send(&storyboard_conversation(), 0.4).await.unwrap();
    assert!(reply.contains("\"shots\""));
}

#[tokio::test]
async fn test_live_reply_is_returned_verbatim() {
    let server = serve(|_| {
        vec![(
            200,
            r#"{"model":"phi3","message":{"role":"assistant","content":"{\"shots\": []}"},"done":true}"#
                .to_string(),
        )]
    })
    .await;
    let gateway = OllamaGateway::new(
        format!("{}/api/chat", server.base_url),
        "phi3",
        Duration::from_secs(5),
    )
    .unwrap();

    let reply = gateway.send(&storyboard_conversation(), 0.2).await.unwrap();
    assert_eq!(reply, r#"{"shots": []}"#);

    let requests = server.requests();
    assert_eq!(server.request_lines(), vec!["POST /api/chat"]);
    assert!(requests[0].contains(r#""stream":false"#));
    assert!(requests[0].contains(r#""model":"phi3""#));
    assert!(requests[0].contains(r#""role":"system""#));
    assert!(requests[0].contains(r#""temperature""#));
}

#[tokio::test]
async fn test_http_error_status_propagates() {
    let server = serve(|_| vec![(500, r#"{"error":"model not loaded"}"#.to_string())]).await;
    let gateway = OllamaGateway::new(
        format!("{}/api/chat", server.base_url),
        "phi3",
        Duration::from_secs(5),
    )
    .unwrap();

    let err = gateway.send(&storyboard_conversation(), 0.4).await.unwrap_err();
    match err.kind() {
        AdreelErrorKind::Provider(e) => match &e.kind {
            ProviderErrorKind::Http {
                status_code,
                message,
            } => {
                assert_eq!(*status_code, 500);
                assert!(message.contains("model not loaded"));
            }
            other => panic!("unexpected provider error {:?}", other),
        },
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_content_is_a_provider_error() {
    let server = serve(|_| vec![(200, r#"{"done":true}"#.to_string())]).await;
    let gateway = OllamaGateway::new(
        format!("{}/api/chat", server.base_url),
        "phi3",
        Duration::from_secs(5),
    )
    .unwrap();

    let err = gateway.send(&storyboard_conversation(), 0.4).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        AdreelErrorKind::Provider(e) if matches!(e.kind, ProviderErrorKind::MissingField(_))
    ));
}

#[tokio::test]
async fn test_malformed_body_is_a_provider_error() {
    let server = serve(|_| vec![(200, "not json".to_string())]).await;
    let gateway = OllamaGateway::new(
        format!("{}/api/chat", server.base_url),
        "phi3",
        Duration::from_secs(5),
    )
    .unwrap();

    let err = gateway.send(&storyboard_conversation(), 0.4).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        AdreelErrorKind::Provider(e) if matches!(e.kind, ProviderErrorKind::MalformedResponse(_))
    ));
}

#[test]
fn test_gateway_reports_names() {
    let gateway =
        OllamaGateway::new("http://localhost:11434/api/chat", "llama3.1", Duration::from_secs(1))
            .unwrap();
    assert_eq!(gateway.provider_name(), "ollama");
    assert_eq!(gateway.model_name(), "llama3.1");
}
