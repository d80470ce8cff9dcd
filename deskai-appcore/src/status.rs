use std::time::Instant;

use deskai_core::error::{ClientFailure, FailureKind};
use serde::Serialize;

use crate::dispatch::Completion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStage {
    Idle,
    Generating,
    Success,
    Error,
}

impl Default for RequestStage {
    fn default() -> Self {
        Self::Idle
    }
}

fn stage_label(stage: RequestStage) -> &'static str {
    match stage {
        RequestStage::Idle => "idle",
        RequestStage::Generating => "generating",
        RequestStage::Success => "success",
        RequestStage::Error => "error",
    }
}

/// What a shell renders: stage, a stable label, and the latest outcome.
#[derive(Debug, Clone, Serialize)]
pub struct StatusPayload {
    pub stage: RequestStage,
    pub stage_label: String,
    pub in_flight: bool,
    pub elapsed_ms: Option<u64>,
    pub error: Option<String>,
    pub error_kind: Option<FailureKind>,
    pub last_text_preview: Option<String>,
    pub last_text_available: bool,
}

/// Tracks one action's lifecycle on the UI-owning side. The shell calls
/// `begin` when a submission is accepted and `apply` for each current
/// completion it drains.
#[derive(Debug, Default)]
pub struct RequestStatus {
    stage: RequestStage,
    started_at: Option<Instant>,
    elapsed_ms: Option<u64>,
    last_text: Option<String>,
    error: Option<String>,
    error_kind: Option<FailureKind>,
}

impl RequestStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> RequestStage {
        self.stage
    }

    pub fn last_text(&self) -> Option<&str> {
        self.last_text.as_deref()
    }

    pub fn begin(&mut self) {
        self.stage = RequestStage::Generating;
        self.started_at = Some(Instant::now());
        self.elapsed_ms = None;
        self.error = None;
        self.error_kind = None;
    }

    /// Records a synchronous rejection (validation, missing config) that
    /// never reached the dispatcher.
    pub fn reject(&mut self, failure: &ClientFailure) {
        self.stage = RequestStage::Error;
        self.started_at = None;
        self.error = Some(failure.to_string());
        self.error_kind = Some(failure.kind());
    }

    pub fn apply(&mut self, completion: &Completion) {
        self.elapsed_ms = self
            .started_at
            .take()
            .map(|t| t.elapsed().as_millis() as u64);

        match completion {
            Completion::Success { text, .. } => {
                self.stage = RequestStage::Success;
                // Stored untouched; the result view shows these bytes.
                self.last_text = Some(text.clone());
                self.error = None;
                self.error_kind = None;
            }
            Completion::Failure { failure, .. } => {
                self.stage = RequestStage::Error;
                self.error = Some(failure.to_string());
                self.error_kind = Some(failure.kind());
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn payload(&self) -> StatusPayload {
        let elapsed_ms = match self.stage {
            RequestStage::Generating => {
                self.started_at.map(|t| t.elapsed().as_millis() as u64)
            }
            _ => self.elapsed_ms,
        };

        StatusPayload {
            stage: self.stage,
            stage_label: stage_label(self.stage).into(),
            in_flight: self.stage == RequestStage::Generating,
            elapsed_ms,
            error: self.error.clone(),
            error_kind: self.error_kind,
            last_text_preview: self.last_text.as_deref().map(preview_text),
            last_text_available: self
                .last_text
                .as_ref()
                .map(|t| !t.is_empty())
                .unwrap_or(false),
        }
    }
}

fn preview_text(text: &str) -> String {
    const MAX: usize = 120;
    let trimmed = text.trim();
    if trimmed.chars().count() <= MAX {
        return trimmed.to_string();
    }

    trimmed.chars().take(MAX).collect::<String>() + "…"
}
