//! Router-level tests for the website endpoints, using mock providers so no
//! network or credential is needed.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use sitegen_service::config::{CommonConfig, GoogleConfig, ModelConfig, SitegenConfig};
use sitegen_service::services::providers::mock::{FailingTextProvider, MockTextProvider};
use sitegen_service::services::providers::{GenerationParams, TextProvider};
use sitegen_service::startup::{AppState, build_router};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_config() -> SitegenConfig {
    SitegenConfig {
        common: CommonConfig { port: 0 },
        google: GoogleConfig {
            api_key: "test-api-key".to_string(),
        },
        models: ModelConfig {
            text_model: "gemini-1.5-flash".to_string(),
        },
    }
}

fn app_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        config: test_config(),
        text_provider: provider,
    })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn generate_returns_model_text_verbatim() {
    let model_text = "```html\n<h1>Todo</h1>\n```\n```css\nh1 {}\n```\n```javascript\n\n```";
    let mock = Arc::new(MockTextProvider::new(model_text));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json(
            "/api/generate_website",
            r#"{"description": "a todo app"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], model_text);
    assert_eq!(mock.call_count(), 1);

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("a todo app"));
}

#[tokio::test]
async fn generate_uses_fixed_sampling_params() {
    let mock = Arc::new(MockTextProvider::new("ok"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json(
            "/api/generate_website",
            r#"{"description": "a blog"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        mock.last_params().unwrap(),
        GenerationParams::website_codegen()
    );
}

#[tokio::test]
async fn generate_missing_description_returns_400_without_provider_call() {
    let mock = Arc::new(MockTextProvider::new("should never be returned"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json("/api/generate_website", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("description"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn generate_empty_description_returns_400() {
    let mock = Arc::new(MockTextProvider::new("unused"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json(
            "/api/generate_website",
            r#"{"description": ""}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn modify_with_omitted_js_embeds_empty_block_and_succeeds() {
    let mock = Arc::new(MockTextProvider::new("modified site"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json(
            "/api/modify_website",
            r#"{
                "modificationDescription": "make it dark mode",
                "currentHtml": "<h1>Hi</h1>",
                "currentCss": "h1 { color: red; }"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], "modified site");
    assert_eq!(mock.call_count(), 1);

    let prompt = mock.last_prompt().unwrap();
    assert!(prompt.contains("make it dark mode"));
    assert!(prompt.contains("```html\n<h1>Hi</h1>\n```"));
    assert!(prompt.contains("```javascript\n\n```"));
}

#[tokio::test]
async fn modify_uses_same_sampling_params_as_generate() {
    let mock = Arc::new(MockTextProvider::new("ok"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json(
            "/api/modify_website",
            r#"{
                "modificationDescription": "add a footer",
                "currentHtml": "<p></p>",
                "currentCss": "p {}",
                "currentJs": "console.log('hi');"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        mock.last_params().unwrap(),
        GenerationParams::website_codegen()
    );
}

#[tokio::test]
async fn modify_missing_required_field_returns_400_without_provider_call() {
    let mock = Arc::new(MockTextProvider::new("unused"));
    let app = app_with(mock.clone());

    // currentCss missing
    let response = app
        .oneshot(post_json(
            "/api/modify_website",
            r#"{
                "modificationDescription": "make it dark mode",
                "currentHtml": "<h1>Hi</h1>"
            }"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn provider_failure_returns_500_with_error_and_traceback() {
    let failing = Arc::new(FailingTextProvider::new("quota exceeded"));
    let app = app_with(failing);

    let response = app
        .oneshot(post_json(
            "/api/generate_website",
            r#"{"description": "a shop"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"], "API error: quota exceeded");
    assert!(!body["traceback"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_json_body_returns_500_json_error() {
    let mock = Arc::new(MockTextProvider::new("unused"));
    let app = app_with(mock.clone());

    let response = app
        .oneshot(post_json("/api/generate_website", "this is not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn preflight_returns_cors_headers_and_no_body() {
    for uri in ["/api/generate_website", "/api/modify_website"] {
        let app = app_with(Arc::new(MockTextProvider::new("unused")));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                    .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers().clone();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "content-type");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn health_check_returns_ok() {
    let app = app_with(Arc::new(MockTextProvider::new("unused")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "sitegen-service");
}

#[tokio::test]
async fn readiness_reflects_provider_health() {
    let app = app_with(Arc::new(MockTextProvider::new("unused")));
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = app_with(Arc::new(FailingTextProvider::new("down")));
    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}
