//! Chat, one-shot text, and image generation against a mock provider.

use mockito::Matcher;
use nexus_genai::{prompts, AspectRatio, Error, GeminiClient, Role, NO_RESPONSE_SENTINEL};
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> GeminiClient {
    GeminiClient::builder()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .expect("client should build")
}

fn text_reply(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn chat_turn_appends_to_the_transcript() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
        .match_body(Matcher::PartialJson(json!({
            "systemInstruction": { "parts": [{ "text": prompts::CHAT_PERSONA }] },
            "contents": [{ "role": "user", "parts": [{ "text": "Hello" }] }],
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(text_reply("Hi there!"))
        .create_async()
        .await;

    let client = client_for(&server);
    let mut chat = client.start_chat(None);
    let reply = chat.send("Hello").await.unwrap();

    assert_eq!(reply, "Hi there!");
    let history = chat.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, Role::User);
    assert_eq!(history[0].text, "Hello");
    assert_eq!(history[1].role, Role::Model);
    assert_eq!(history[1].text, "Hi there!");
    mock.assert_async().await;
}

#[tokio::test]
async fn failed_chat_turn_leaves_the_transcript_untouched() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body(r#"{"error":{"message":"Internal error encountered."}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut chat = client.start_chat(None);
    let err = chat.send("Hello").await.unwrap_err();

    assert!(matches!(err, Error::Service { .. }));
    assert!(chat.history().is_empty(), "failed send must not record turns");
}

#[tokio::test]
async fn empty_chat_reply_becomes_the_sentinel() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let mut chat = client.start_chat(None);
    assert_eq!(chat.send("Hello").await.unwrap(), NO_RESPONSE_SENTINEL);
}

#[tokio::test]
async fn one_shot_text_passes_the_system_instruction() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "systemInstruction": {
                "parts": [{ "text": "You are a professional content writer. Write a Blog Post with a Professional tone." }]
            },
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(text_reply("Once upon a time..."))
        .create_async()
        .await;

    let text = client_for(&server)
        .generate_text(
            "Topic: foxes",
            &prompts::writer_instruction("Blog Post", "Professional"),
        )
        .await
        .unwrap();
    assert_eq!(text, "Once upon a time...");
    mock.assert_async().await;
}

#[tokio::test]
async fn empty_one_shot_payload_is_content_not_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/gemini-2.5-flash:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#)
        .create_async()
        .await;

    let text = client_for(&server)
        .generate_text("hi", "be brief")
        .await
        .unwrap();
    assert_eq!(text, NO_RESPONSE_SENTINEL);
}

#[tokio::test]
async fn image_generation_decodes_the_payload() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/imagen-4.0-generate-001:predict")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(json!({
            "instances": [{ "prompt": "a red fox" }],
            "parameters": { "sampleCount": 1, "aspectRatio": "16:9" },
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        // "hello" in base64
        .with_body(r#"{"predictions":[{"bytesBase64Encoded":"aGVsbG8=","mimeType":"image/jpeg"}]}"#)
        .create_async()
        .await;

    let artifact = client_for(&server)
        .generate_image("a red fox", AspectRatio::Wide)
        .await
        .unwrap();

    assert_eq!(artifact.bytes(), b"hello");
    assert_eq!(artifact.mime_type(), "image/jpeg");
    assert!(artifact.to_data_uri().starts_with("data:image/jpeg;base64,"));
    mock.assert_async().await;
}

#[tokio::test]
async fn zero_images_is_a_generation_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/models/imagen-4.0-generate-001:predict")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"predictions":[]}"#)
        .create_async()
        .await;

    let err = client_for(&server)
        .generate_image("a red fox", AspectRatio::Square)
        .await
        .unwrap_err();
    match err {
        Error::Generation(message) => assert_eq!(message, "No image generated"),
        other => panic!("expected Generation, got {other:?}"),
    }
}
