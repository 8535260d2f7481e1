use crate::types::Stage;
use thiserror::Error;

/// Top-level error for pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("stage '{stage}' failed: {message}")]
    StageFailed { stage: Stage, message: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::Other(err.to_string())
    }
}

/// Error raised by a live completion backend during a call.
///
/// Construction-time unavailability is not represented here: a missing
/// credential surfaces as [`InitError`] and is typically converted into the
/// degraded provider instead of an error.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Connect(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}

/// Failure to initialize a live backend provider.
///
/// Kept narrow on purpose: only the enumerated conditions below justify
/// falling back to degraded mode. Anything else (bad model name, transport
/// trouble) surfaces later as a [`ProviderError`] on the actual call.
#[derive(Error, Debug)]
pub enum InitError {
    #[error("missing credential: environment variable '{0}' is not set")]
    MissingCredential(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
