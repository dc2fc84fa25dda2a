//! `/chat` and `/model_info` over HTTP

#[cfg(test)]
mod tests {
    use crate::common::{ScriptedPlatform, bearer, test_state};
    use actix_web::http::{StatusCode, header};
    use actix_web::test;
    use chat_gateway::core::FALLBACK_RESPONSE;
    use chat_gateway::server::HttpServer;
    use chat_gateway::utils::error::ErrorResponse;
    use chat_gateway::{AiPlatform, ProviderError};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn chat_request(prompt: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/chat")
            .set_json(json!({ "prompt": prompt }))
    }

    #[actix_web::test]
    async fn test_chat_success() {
        let platform = Arc::new(ScriptedPlatform::replying("Rust is a language."));
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(platform.clone() as Arc<dyn AiPlatform>),
            None,
        )))
        .await;

        let body: Value =
            test::call_and_read_body_json(&app, chat_request("What is Rust?").to_request()).await;
        assert_eq!(body, json!({ "response": "Rust is a language." }));
        assert_eq!(platform.prompts(), vec!["What is Rust?".to_string()]);
    }

    #[actix_web::test]
    async fn test_empty_prompt_is_bad_request() {
        let platform = Arc::new(ScriptedPlatform::replying("unused"));
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(platform.clone() as Arc<dyn AiPlatform>),
            None,
        )))
        .await;

        let resp = test::call_service(&app, chat_request("").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "INVALID_ARGUMENT");
        assert_eq!(body.error.message, "Prompt cannot be empty.");
        assert!(platform.prompts().is_empty());
    }

    #[actix_web::test]
    async fn test_oversized_prompt_is_bad_request() {
        let platform = Arc::new(ScriptedPlatform::replying("unused"));
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(platform.clone() as Arc<dyn AiPlatform>),
            None,
        )))
        .await;

        let prompt = "x".repeat(1001);
        let resp = test::call_service(&app, chat_request(&prompt).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            body.error.message,
            "Prompt exceeds the maximum length of 1000 characters."
        );
        assert!(platform.prompts().is_empty());
    }

    #[actix_web::test]
    async fn test_fourth_anonymous_request_is_rate_limited() {
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(Arc::new(ScriptedPlatform::replying("ok"))),
            None,
        )))
        .await;

        for _ in 0..3 {
            let resp = test::call_service(&app, chat_request("Hi").to_request()).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = test::call_service(&app, chat_request("Hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let retry_after: u64 = resp
            .headers()
            .get(header::RETRY_AFTER)
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=60).contains(&retry_after));

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "RATE_LIMIT_EXCEEDED");
        assert_eq!(body.error.message, "Rate limit exceeded. Please try again later.");
    }

    #[actix_web::test]
    async fn test_tenth_authenticated_request_is_rate_limited() {
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(Arc::new(ScriptedPlatform::replying("ok"))),
            None,
        )))
        .await;
        let req = test::TestRequest::post()
            .uri("/token")
            .set_form([("username", "testuser"), ("password", "testpassword")])
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let token = body["access_token"].as_str().unwrap().to_string();

        for i in 0..9 {
            let req = chat_request("Hi").insert_header(bearer(&token)).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "request {} should pass", i + 1);
        }

        let req = chat_request("Hi").insert_header(bearer(&token)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        // The anonymous bucket is separate
        let resp = test::call_service(&app, chat_request("Hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_empty_model_response_uses_fallback() {
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(Arc::new(ScriptedPlatform::silent())),
            None,
        )))
        .await;

        let resp = test::call_service(&app, chat_request("Hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["response"], FALLBACK_RESPONSE);
    }

    #[actix_web::test]
    async fn test_system_prompt_is_prefixed() {
        let platform = Arc::new(ScriptedPlatform::replying("ok"));
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(platform.clone() as Arc<dyn AiPlatform>),
            Some("You are terse."),
        )))
        .await;

        test::call_service(&app, chat_request("Hello").to_request()).await;
        assert_eq!(platform.prompts(), vec!["You are terse.\n\nHello".to_string()]);
    }

    #[actix_web::test]
    async fn test_provider_failure_is_bad_gateway() {
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(Arc::new(ScriptedPlatform::failing(
                ProviderError::api_error("gemini", 503, "overloaded"),
            ))),
            None,
        )))
        .await;

        let resp = test::call_service(&app, chat_request("Hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "PROVIDER_ERROR");
        assert_eq!(body.error.message, "AI provider request failed");
    }

    #[actix_web::test]
    async fn test_unconfigured_platform() {
        let app = test::init_service(HttpServer::create_app(test_state(None, None))).await;

        let resp = test::call_service(&app, chat_request("Hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.message, "AI platform is not configured properly.");

        let req = test::TestRequest::get().uri("/model_info").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_model_info() {
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(Arc::new(ScriptedPlatform::silent())),
            None,
        )))
        .await;

        let req = test::TestRequest::get().uri("/model_info").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({
                "model_name": "scripted-model",
                "description": "Scripted test platform"
            })
        );
    }

    #[actix_web::test]
    async fn test_non_json_body_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(test_state(
            Some(Arc::new(ScriptedPlatform::silent())),
            None,
        )))
        .await;

        let req = test::TestRequest::post()
            .uri("/chat")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
