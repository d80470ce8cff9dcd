use crate::traits::{GeneratedReply, TextGenerator};
use deskai_core::config::ClientConfig;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

const STAGE_GENERATING: &str = "generating";
const STAGE_DONE: &str = "done";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("refusing to send an empty prompt")]
    EmptyPrompt,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RequestTimings {
    pub generation_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestResult {
    pub reply: GeneratedReply,
    pub timings: RequestTimings,
}

/// Runs one prompt through the configured generator. Holds the config by
/// value (it is cheap and immutable) and the generator behind a trait so
/// tests and shells can substitute their own.
pub struct AdvisorEngine {
    cfg: ClientConfig,
    generator: Arc<dyn TextGenerator>,
}

impl AdvisorEngine {
    pub fn new(cfg: ClientConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self { cfg, generator }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.cfg
    }

    /// Sends one prompt and returns the reply text untouched.
    pub async fn run_request(&self, prompt: &str) -> anyhow::Result<RequestResult> {
        self.run_request_with_hook(prompt, |_stage| async {}).await
    }

    /// Same as `run_request`, but emits a stage hook as the call progresses.
    ///
    /// The hook is intended for UI progress (e.g. a loading label) and must
    /// be fast.
    pub async fn run_request_with_hook<F, Fut>(
        &self,
        prompt: &str,
        on_stage: F,
    ) -> anyhow::Result<RequestResult>
    where
        F: Fn(&'static str) -> Fut,
        Fut: Future<Output = ()>,
    {
        if prompt.trim().is_empty() {
            return Err(EngineError::EmptyPrompt.into());
        }

        on_stage(STAGE_GENERATING).await;

        let t0 = Instant::now();
        let reply = self
            .generator
            .generate(&self.cfg.base_url, &self.cfg.api_key, &self.cfg.model, prompt)
            .await?;
        let generation_ms = ms(t0.elapsed());

        on_stage(STAGE_DONE).await;

        Ok(RequestResult {
            reply,
            timings: RequestTimings {
                generation_ms: Some(generation_ms),
            },
        })
    }
}

pub fn ms(d: Duration) -> u64 {
    d.as_millis().try_into().unwrap_or(u64::MAX)
}
