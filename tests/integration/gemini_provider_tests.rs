//! Gemini provider against a mock `generateContent` endpoint

#[cfg(test)]
mod tests {
    use crate::common::test_config;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chat_gateway::server::{AppState, HttpServer};
    use chat_gateway::{AiPlatform, GeminiConfig, GeminiProvider, ProviderError};
    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATE_PATH: &str = "/models/test-model:generateContent";

    fn create_config(mock_server: &MockServer) -> GeminiConfig {
        GeminiConfig::new("test-api-key")
            .with_model("test-model")
            .with_base_url(mock_server.uri())
    }

    fn create_provider(mock_server: &MockServer) -> GeminiProvider {
        GeminiProvider::new(create_config(mock_server)).unwrap()
    }

    fn text_response(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": text }]
                },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_chat_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-api-key"))
            .and(body_partial_json(json!({
                "contents": [{ "role": "user", "parts": [{ "text": "Hello, world!" }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hi there")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        let text = provider.chat("Hello, world!").await.unwrap();
        assert_eq!(text.as_deref(), Some("Hi there"));
    }

    #[tokio::test]
    async fn test_safety_settings_are_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(body_partial_json(json!({
                "safetySettings": [{
                    "category": "HARM_CATEGORY_HATE_SPEECH",
                    "threshold": "BLOCK_ONLY_HIGH"
                }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("ok")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        assert!(provider.chat("Hello").await.is_ok());
    }

    #[tokio::test]
    async fn test_no_candidates_yields_no_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [],
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        assert_eq!(provider.chat("Hello").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rate_limit_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(
                ResponseTemplate::new(429)
                    .insert_header("retry-after", "12")
                    .set_body_json(json!({
                        "error": { "code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED" }
                    })),
            )
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        let err = provider.chat("Hello").await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::RateLimit {
                retry_after: Some(12),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "error": { "code": 403, "message": "API key not valid", "status": "PERMISSION_DENIED" }
            })))
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        let err = provider.chat("Hello").await.unwrap_err();
        assert_eq!(
            err,
            ProviderError::authentication("gemini", "API key not valid")
        );
    }

    #[tokio::test]
    async fn test_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        let err = provider.chat("Hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::ApiError { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let provider = create_provider(&mock_server);
        let err = provider.chat("Hello").await.unwrap_err();
        assert!(matches!(err, ProviderError::ResponseParsing { .. }));
    }

    #[actix_web::test]
    async fn test_full_stack_chat() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Pong")))
            .expect(1)
            .mount(&mock_server)
            .await;

        let mut config = test_config();
        config.gateway.provider.gemini = create_config(&mock_server);
        config.gateway.provider.system_prompt_path = "does/not/exist.md".into();
        let state = AppState::from_config(config).await.unwrap();
        let app =
            test::init_service(HttpServer::create_app(actix_web::web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "prompt": "Ping" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "response": "Pong" }));

        let req = test::TestRequest::get().uri("/model_info").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["model_name"], "test-model");
    }

    #[actix_web::test]
    async fn test_full_stack_upstream_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let mut config = test_config();
        config.gateway.provider.gemini = create_config(&mock_server);
        config.gateway.provider.system_prompt_path = "does/not/exist.md".into();
        let state = AppState::from_config(config).await.unwrap();
        let app =
            test::init_service(HttpServer::create_app(actix_web::web::Data::new(state))).await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "prompt": "Ping" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }
}
