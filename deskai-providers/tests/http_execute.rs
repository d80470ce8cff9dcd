use deskai_providers::gemini::{GeminiRequestConfig, build_generate_content_request};
use deskai_providers::parse::parse_generate_content;
use deskai_providers::runtime::execute;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn built_request_executes_and_parses() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-1.5-flash:generateContent"))
        .and(header("content-type", "application/json"))
        .and(header("x-goog-api-key", "k"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"candidates":[{"content":{"parts":[{"text":"pong"}]}}]}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let cfg = GeminiRequestConfig {
        base_url: server.uri(),
        api_key: "k".into(),
        model: "gemini-1.5-flash".into(),
    };

    let req = build_generate_content_request(&cfg, "ping");
    let resp = execute(&req).await.unwrap();

    assert_eq!(resp.status, 200);
    assert_eq!(parse_generate_content(&resp.body).unwrap(), "pong");
}

#[tokio::test]
async fn non_success_status_is_reported_not_hidden() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_raw(
            r#"{"error":{"message":"quota exceeded"}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let cfg = GeminiRequestConfig {
        base_url: server.uri(),
        api_key: "k".into(),
        model: "m".into(),
    };

    let resp = execute(&build_generate_content_request(&cfg, "ping"))
        .await
        .unwrap();
    assert_eq!(resp.status, 429);
    assert!(String::from_utf8_lossy(&resp.body).contains("quota exceeded"));
}
