use crate::traits::{GeneratedReply, TextGenerator};

/// The production generator: one generateContent call per invocation.
#[derive(Clone, Default)]
pub struct GeminiTextGenerator;

impl GeminiTextGenerator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiTextGenerator {
    async fn generate(
        &self,
        base_url: &str,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> anyhow::Result<GeneratedReply> {
        let cfg = deskai_providers::gemini::GeminiRequestConfig {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        };

        let req = deskai_providers::gemini::build_generate_content_request(&cfg, prompt);
        let resp = deskai_providers::runtime::execute(&req).await?;

        if !(200..=299).contains(&resp.status) {
            return Err(anyhow::anyhow!(
                "generateContent request failed: status={} body={}",
                resp.status,
                String::from_utf8_lossy(&resp.body)
            ));
        }

        let text = deskai_providers::parse::parse_generate_content(&resp.body)?;
        Ok(GeneratedReply {
            text,
            provider: "gemini".into(),
            model: model.into(),
        })
    }
}
