//! crates/mood_check_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the two external capabilities the
//! core depends on. These traits form the boundary of the hexagonal architecture,
//! so the core stays independent of the concrete HTTP services behind them.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::AnalysisRequest;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// The ways a call to an external capability can fail.
///
/// Every variant is absorbed by the enrichment orchestrator; none of them
/// reaches the caller of the analyze endpoint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    #[error("Transport failure: {0}")]
    Transport(String),
    #[error("Upstream responded with status {0}")]
    Status(u16),
    #[error("Upstream returned an empty response")]
    EmptyResponse,
    #[error("Unexpected response shape: {0}")]
    MalformedResponse(String),
}

impl PortError {
    /// Short, stable label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout(_) => "timeout",
            Self::Transport(_) => "transport",
            Self::Status(_) => "status",
            Self::EmptyResponse => "empty_response",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait AnalysisGenerationService: Send + Sync {
    /// Produces a short piece of advice for a scored assessment.
    /// The returned text is trimmed and never empty.
    async fn generate(&self, request: &AnalysisRequest<'_>, timeout: Duration)
        -> PortResult<String>;

    /// Checks whether the generation backend is reachable.
    async fn health_check(&self) -> PortResult<()>;
}

#[async_trait]
pub trait TranslationService: Send + Sync {
    /// Renders `text` from `source_lang` into `target_lang`.
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        timeout: Duration,
    ) -> PortResult<String>;
}
