use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a form submission was blocked before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ValidationError {
    #[error("please enter a {field}")]
    Missing { field: &'static str },

    #[error("please replace the placeholder text in {field}")]
    Placeholder { field: &'static str },
}

impl ValidationError {
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Missing { field } => field,
            ValidationError::Placeholder { field } => field,
        }
    }
}

/// Everything a submission can fail with, kept as distinct kinds so a
/// shell can present them differently instead of sniffing message text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum ClientFailure {
    #[error("assistant is not available: {0}")]
    Config(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("request failed: {0}")]
    Call(String),
}

impl ClientFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            ClientFailure::Config(_) => FailureKind::Config,
            ClientFailure::Validation(_) => FailureKind::Validation,
            ClientFailure::Call(_) => FailureKind::Call,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    Config,
    Validation,
    Call,
}
