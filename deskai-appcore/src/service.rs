use std::sync::Arc;

use deskai_core::config::{ClientConfig, ConfigError};
use deskai_core::error::ClientFailure;
use deskai_engine::engine::AdvisorEngine;
use deskai_engine::traits::TextGenerator;

/// What the footer status line should say about the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantStatus {
    Ready { model: String },
    Unavailable { reason: String },
}

impl AssistantStatus {
    pub fn line(&self) -> &'static str {
        match self {
            AssistantStatus::Ready { .. } => "AI assistant ready",
            AssistantStatus::Unavailable { .. } => "AI assistant unavailable - check API key",
        }
    }
}

enum Backend {
    Ready(AdvisorEngine),
    Unavailable(String),
}

/// One service per app process, constructed at startup and shared by
/// reference with every action. A failed configuration still yields a
/// working service; it just answers every generation with a Config
/// failure instead of crashing.
#[derive(Clone)]
pub struct AppService {
    backend: Arc<Backend>,
}

impl AppService {
    pub fn ready(cfg: ClientConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend: Arc::new(Backend::Ready(AdvisorEngine::new(cfg, generator))),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::error!("assistant initialization failed: {reason}");
        Self {
            backend: Arc::new(Backend::Unavailable(reason)),
        }
    }

    /// Resolves the environment once; a missing API key becomes an
    /// unavailable service rather than an error.
    pub fn from_env(generator: Arc<dyn TextGenerator>) -> Self {
        match ClientConfig::from_env() {
            Ok(cfg) => Self::ready(cfg, generator),
            Err(e @ ConfigError::MissingApiKey(_)) => Self::unavailable(e.to_string()),
        }
    }

    pub fn status(&self) -> AssistantStatus {
        match self.backend.as_ref() {
            Backend::Ready(engine) => AssistantStatus::Ready {
                model: engine.config().model.clone(),
            },
            Backend::Unavailable(reason) => AssistantStatus::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.backend.as_ref(), Backend::Ready(_))
    }

    /// Performs exactly one external call and returns the reply text
    /// verbatim. All failure paths come back as a typed `ClientFailure`.
    pub async fn generate(&self, prompt: &str) -> Result<String, ClientFailure> {
        match self.backend.as_ref() {
            Backend::Unavailable(reason) => Err(ClientFailure::Config(reason.clone())),
            Backend::Ready(engine) => match engine.run_request(prompt).await {
                Ok(result) => Ok(result.reply.text),
                Err(e) => Err(ClientFailure::Call(e.to_string())),
            },
        }
    }
}
