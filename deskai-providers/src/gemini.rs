use crate::request::{HttpRequest, Method};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiRequestConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

/// Builds a `models/{model}:generateContent` call carrying a single
/// user-authored text part. The API key travels in a header, not the URL,
/// so request logs stay safe.
pub fn build_generate_content_request(cfg: &GeminiRequestConfig, prompt: &str) -> HttpRequest {
    let url = join_url(
        &cfg.base_url,
        &format!("/models/{}:generateContent", cfg.model),
    );

    let payload = json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
    });

    HttpRequest {
        method: Method::Post,
        url,
        headers: vec![
            ("Content-Type".into(), "application/json".into()),
            ("x-goog-api-key".into(), cfg.api_key.clone()),
        ],
        json_body: Some(payload.to_string()),
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
