//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use mood_check_core::{
    enrichment::EnrichmentOrchestrator,
    ports::{AnalysisGenerationService, TranslationService},
};
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// Everything in here is immutable; requests never coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn AnalysisGenerationService>,
    pub enrichment: Arc<EnrichmentOrchestrator>,
}

impl AppState {
    /// Wires the two ports into an orchestrator configured from `config`.
    pub fn new(
        config: Arc<Config>,
        generator: Arc<dyn AnalysisGenerationService>,
        translator: Arc<dyn TranslationService>,
    ) -> Self {
        let enrichment = Arc::new(EnrichmentOrchestrator::new(
            generator.clone(),
            translator,
            config.enrichment_settings(),
        ));
        Self {
            config,
            generator,
            enrichment,
        }
    }
}
