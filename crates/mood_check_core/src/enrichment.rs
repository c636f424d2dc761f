//! crates/mood_check_core/src/enrichment.rs
//!
//! Sequences the two external stages (generate advice, then translate it) and
//! applies the fallback policy. Nothing in here can fail the request: every
//! port error is logged and turned into a degraded `EnrichmentResult`.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::domain::{AnalysisRequest, Assessment, EnrichmentResult, ScoreResult};
use crate::ports::{AnalysisGenerationService, PortError, TranslationService};

/// Timeouts and language pair used by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentSettings {
    pub generation_timeout: Duration,
    pub translation_timeout: Duration,
    pub source_language: String,
    pub target_language: String,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            generation_timeout: Duration::from_secs(30),
            translation_timeout: Duration::from_secs(10),
            source_language: "es".to_string(),
            target_language: "eu".to_string(),
        }
    }
}

pub struct EnrichmentOrchestrator {
    generator: Arc<dyn AnalysisGenerationService>,
    translator: Arc<dyn TranslationService>,
    settings: EnrichmentSettings,
}

impl EnrichmentOrchestrator {
    pub fn new(
        generator: Arc<dyn AnalysisGenerationService>,
        translator: Arc<dyn TranslationService>,
        settings: EnrichmentSettings,
    ) -> Self {
        Self {
            generator,
            translator,
            settings,
        }
    }

    /// Runs generation and, if it produced text, translation.
    ///
    /// `available` on the result is false only when generation failed; a failed
    /// translation falls back to the untranslated advice.
    pub async fn enrich(&self, assessment: &Assessment, score: &ScoreResult) -> EnrichmentResult {
        let request = AnalysisRequest::new(assessment, score);

        let generated = match self
            .generator
            .generate(&request, self.settings.generation_timeout)
            .await
        {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                log_stage_failure("generation", &PortError::EmptyResponse);
                return EnrichmentResult::unavailable();
            }
            Err(e) => {
                log_stage_failure("generation", &e);
                return EnrichmentResult::unavailable();
            }
        };
        info!(chars = generated.len(), "Analysis generated.");

        if self.settings.source_language == self.settings.target_language {
            debug!(
                language = %self.settings.source_language,
                "Source and target language match; skipping translation."
            );
            return EnrichmentResult::with_text(generated);
        }

        match self
            .translator
            .translate(
                &generated,
                &self.settings.source_language,
                &self.settings.target_language,
                self.settings.translation_timeout,
            )
            .await
        {
            Ok(translated) if !translated.trim().is_empty() => {
                info!(
                    target_language = %self.settings.target_language,
                    "Analysis translated."
                );
                EnrichmentResult::with_text(translated)
            }
            Ok(_) => {
                log_stage_failure("translation", &PortError::EmptyResponse);
                EnrichmentResult::with_text(generated)
            }
            Err(e) => {
                log_stage_failure("translation", &e);
                EnrichmentResult::with_text(generated)
            }
        }
    }
}

fn log_stage_failure(stage: &'static str, error: &PortError) {
    match error {
        PortError::Timeout(after) => {
            warn!(stage, kind = error.kind(), ?after, "Enrichment stage timed out.")
        }
        _ => warn!(stage, kind = error.kind(), %error, "Enrichment stage failed."),
    }
}
