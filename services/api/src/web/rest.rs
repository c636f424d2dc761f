//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use mood_check_core::{
    domain::{
        Assessment, AssessmentError, EnrichmentResult, MentalPeace, PhysicalStrength, ScoreResult,
    },
    scoring,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, info_span, warn, Instrument};
use utoipa::{OpenApi, ToSchema};
use uuid::Uuid;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_handler,
        health_handler,
    ),
    components(
        schemas(AnalyzeRequest, AnalyzeResponse, HealthResponse)
    ),
    tags(
        (name = "Mood Check API", description = "Wellbeing questionnaire scoring with optional generated advice.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

/// The questionnaire as submitted by the form.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Three words describing how you feel right now.
    pub q1: String,
    /// Emotional climate: `positive` or `negative`.
    pub q2: String,
    /// Dominant emotion over the last 24 hours.
    pub q3: String,
    /// Mental peace, 1 to 10.
    pub q4: i64,
    /// Physical symptoms: `positive`, `neutral` or `negative`.
    pub q5: String,
    /// Physical strength, 1 to 5.
    pub q6: i64,
    /// What your body is asking for.
    pub q7: String,
    /// What takes away your calm.
    pub q8: String,
    /// Who or what drains your energy.
    pub q9: String,
    /// What happiness means to you.
    pub q10: String,
}

impl TryFrom<AnalyzeRequest> for Assessment {
    type Error = AssessmentError;

    fn try_from(form: AnalyzeRequest) -> Result<Self, Self::Error> {
        Ok(Assessment {
            current_feeling: form.q1,
            emotional_climate: form.q2.parse()?,
            dominant_emotion: form.q3,
            mental_peace: MentalPeace::new(form.q4)?,
            physical_symptoms: form.q5.parse()?,
            physical_strength: PhysicalStrength::new(form.q6)?,
            body_request: form.q7,
            calm_disruptor: form.q8,
            energy_drain: form.q9,
            happiness_definition: form.q10,
        })
    }
}

/// The form key that carries a validated answer.
fn form_key(field: &str) -> &'static str {
    match field {
        "emotional_climate" => "q2",
        "mental_peace" => "q4",
        "physical_symptoms" => "q5",
        "physical_strength" => "q6",
        _ => "body",
    }
}

/// Validation message naming both the submitted key and the answer, e.g.
/// `q4: mental_peace must be between 1 and 10, got 11`.
fn rejection_message(error: &AssessmentError) -> String {
    format!("{}: {}", form_key(error.field()), error)
}

/// The score plus the optional generated advice.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AnalyzeResponse {
    pub score: u8,
    pub max_score: u8,
    pub percentage: u8,
    /// One of `low`, `medium`, `good`, `great`.
    pub level: String,
    pub llm_analysis: Option<String>,
    pub llm_available: bool,
}

impl AnalyzeResponse {
    pub fn new(score: ScoreResult, enrichment: EnrichmentResult) -> Self {
        let llm_available = enrichment.is_available();
        Self {
            score: score.score,
            max_score: score.max_score,
            percentage: score.percentage,
            level: score.level.as_str().to_string(),
            llm_analysis: enrichment.into_text(),
            llm_available,
        }
    }
}

/// Liveness of this service and of the generation backend.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub ollama: bool,
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Score a questionnaire and attach generated advice when available.
///
/// The score is always returned; advice generation and translation are
/// best-effort and never turn into an error response.
#[utoipa::path(
    post,
    path = "/api/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Assessment scored", body = AnalyzeResponse),
        (status = 400, description = "Body is not valid JSON"),
        (status = 422, description = "Missing field, out-of-range value or unknown category")
    )
)]
pub async fn analyze_handler(
    State(app_state): State<Arc<AppState>>,
    Json(form): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    let request_id = Uuid::new_v4();

    async move {
        let assessment = Assessment::try_from(form).map_err(|e| {
            warn!(error = %e, "Rejected assessment.");
            (StatusCode::UNPROCESSABLE_ENTITY, rejection_message(&e))
        })?;

        let score = scoring::compute(&assessment);
        info!(
            score = score.score,
            percentage = score.percentage,
            level = %score.level,
            "Assessment scored."
        );

        let enrichment = app_state.enrichment.enrich(&assessment, &score).await;
        info!(llm_available = enrichment.is_available(), "Assessment complete.");

        Ok::<_, (StatusCode, String)>(Json(AnalyzeResponse::new(score, enrichment)))
    }
    .instrument(info_span!("analyze", %request_id))
    .await
}

/// Report service health and whether the generation backend answers.
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health_handler(State(app_state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let ollama = match app_state.generator.health_check().await {
        Ok(()) => true,
        Err(e) => {
            debug!(error = %e, "Generation backend is not reachable.");
            false
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        ollama,
    })
}
