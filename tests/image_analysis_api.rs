//! Mock API tests for pharmacy image analysis.

use std::error::Error as _;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pharma_mentor::{GeminiConfig, ImageAnalyzer, ImageData, MentorError};

const GENERATE_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn test_config(server: &MockServer) -> GeminiConfig {
    GeminiConfig::new("test-api-key").with_base_url(server.uri())
}

fn png_image() -> ImageData {
    ImageData::from_bytes(b"\x89PNG\r\n", "image/png")
}

fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn analysis_returns_raw_reply_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(
            "## Identification\nA propranolol blister pack.",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = ImageAnalyzer::new(test_config(&server));
    let analysis = analyzer.analyze_pharmacy_image(&png_image()).await.unwrap();
    assert!(analysis.contains("propranolol blister pack"));
}

#[tokio::test]
async fn request_carries_inline_image_and_instruction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
        .mount(&server)
        .await;

    let analyzer = ImageAnalyzer::new(test_config(&server));
    let image = png_image();
    analyzer.analyze_pharmacy_image(&image).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();

    let parts = body["contents"][0]["parts"].as_array().unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
    assert_eq!(parts[0]["inlineData"]["data"], image.data);
    let instruction = parts[1]["text"].as_str().unwrap();
    assert!(instruction.contains("## Correction Note"));
    // No structured output requested for image analysis.
    assert!(body.get("generationConfig").is_none());
}

#[tokio::test]
async fn empty_reply_yields_fallback_literal_instead_of_failing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let analyzer = ImageAnalyzer::new(test_config(&server));
    let analysis = analyzer.analyze_pharmacy_image(&png_image()).await.unwrap();
    assert_eq!(analysis, "Analysis unavailable for this image.");
}

#[tokio::test]
async fn failure_uses_fixed_message_but_preserves_the_cause() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let analyzer = ImageAnalyzer::new(test_config(&server));
    let err = analyzer
        .analyze_pharmacy_image(&png_image())
        .await
        .unwrap_err();

    // Caller-facing message is fixed regardless of the underlying error.
    assert_eq!(err.to_string(), "Image analysis failed. Please try again.");

    // The root cause is still reachable through the source chain.
    let cause = err.source().expect("cause must be preserved");
    assert!(cause.to_string().contains("Resource has been exhausted"));
}
