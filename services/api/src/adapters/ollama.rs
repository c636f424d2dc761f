//! services/api/src/adapters/ollama.rs
//!
//! This module contains the adapter for the advice-generating LLM, served by a
//! local Ollama instance. It implements the `AnalysisGenerationService` port
//! from the `core` crate.

const PROMPT_TEMPLATE: &str = r#"Eres un asistente empático de bienestar emocional. Basándote en este test, da un consejo breve y cálido (2-3 frases en español).

RESULTADOS:
- Sentimiento actual: {current_feeling}
- Clima emocional: {emotional_climate}
- Emoción dominante (24h): {dominant_emotion}
- Paz mental (1-10): {mental_peace}
- Síntomas físicos: {physical_symptoms}
- Fuerza física (1-5): {physical_strength}
- Lo que pide el cuerpo: {body_request}
- Lo que quita la calma: {calm_disruptor}
- Quién/qué drena energía: {energy_drain}
- Qué es la felicidad: {happiness_definition}

PUNTUACIÓN: {percentage}%

Da un consejo personalizado, cálido y breve:"#;

use async_trait::async_trait;
use mood_check_core::{
    domain::{AnalysisRequest, EmotionalClimate},
    ports::{AnalysisGenerationService, PortError, PortResult},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use super::port_error_from_reqwest;
use crate::config::Config;

//=========================================================================================
// Wire Types
//=========================================================================================

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `AnalysisGenerationService` against Ollama's
/// non-streaming `/api/generate` endpoint.
#[derive(Clone)]
pub struct OllamaAnalysisAdapter {
    client: reqwest::Client,
    endpoint: String,
    health_endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    health_timeout: Duration,
}

impl OllamaAnalysisAdapter {
    /// Creates the adapter from the loaded configuration, which owns every default.
    pub fn from_config(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: config.generation_endpoint.clone(),
            health_endpoint: config.generation_health_endpoint.clone(),
            model: config.generation_model.clone(),
            temperature: config.generation_temperature,
            max_tokens: config.generation_max_tokens,
            health_timeout: config.health_check_timeout,
        }
    }

    /// Fills the prompt template with every answer and the score percentage.
    pub fn build_prompt(request: &AnalysisRequest<'_>) -> String {
        let a = request.assessment;
        let climate = match a.emotional_climate {
            EmotionalClimate::Positive => "soleado/positivo",
            EmotionalClimate::Negative => "tormentoso/nublado",
        };
        let mental_peace = a.mental_peace.value().to_string();
        let physical_strength = a.physical_strength.value().to_string();
        let percentage = request.score.percentage.to_string();

        fill_template(PROMPT_TEMPLATE, |slot| match slot {
            "current_feeling" => Some(a.current_feeling.as_str()),
            "emotional_climate" => Some(climate),
            "dominant_emotion" => Some(a.dominant_emotion.as_str()),
            "mental_peace" => Some(mental_peace.as_str()),
            "physical_symptoms" => Some(a.physical_symptoms.as_str()),
            "physical_strength" => Some(physical_strength.as_str()),
            "body_request" => Some(a.body_request.as_str()),
            "calm_disruptor" => Some(a.calm_disruptor.as_str()),
            "energy_drain" => Some(a.energy_drain.as_str()),
            "happiness_definition" => Some(a.happiness_definition.as_str()),
            "percentage" => Some(percentage.as_str()),
            _ => None,
        })
    }
}

/// Substitutes `{slot}` placeholders in a single pass over `template`.
///
/// Only the template is scanned; substituted values are copied verbatim, so
/// braces inside an answer are never read as placeholders.
fn fill_template<'v, F>(template: &str, value_of: F) -> String
where
    F: Fn(&str) -> Option<&'v str>,
{
    let mut filled = String::with_capacity(template.len() + 512);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        filled.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let slot = after
            .find('}')
            .and_then(|close| value_of(&after[..close]).map(|value| (close, value)));
        match slot {
            Some((close, value)) => {
                filled.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                filled.push('{');
                rest = after;
            }
        }
    }
    filled.push_str(rest);
    filled
}

//=========================================================================================
// `AnalysisGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl AnalysisGenerationService for OllamaAnalysisAdapter {
    async fn generate(
        &self,
        request: &AnalysisRequest<'_>,
        timeout: Duration,
    ) -> PortResult<String> {
        let prompt = Self::build_prompt(request);
        let body = GenerateRequest {
            model: &self.model,
            prompt: &prompt,
            stream: false,
            options: GenerateOptions {
                temperature: self.temperature,
                num_predict: self.max_tokens,
            },
        };

        debug!(model = %self.model, endpoint = %self.endpoint, "Requesting analysis.");
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| port_error_from_reqwest(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Generation backend rejected the request.");
            return Err(PortError::Status(status.as_u16()));
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| port_error_from_reqwest(e, timeout))?;

        let text = generated.response.trim();
        if text.is_empty() {
            return Err(PortError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    async fn health_check(&self) -> PortResult<()> {
        let response = self
            .client
            .get(&self.health_endpoint)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| port_error_from_reqwest(e, self.health_timeout))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(PortError::Status(response.status().as_u16()))
        }
    }
}
