//! services/api/src/adapters/translate.rs
//!
//! This module contains the adapter for the keyless Google Translate endpoint
//! (`client=gtx`). It implements the `TranslationService` port from the `core` crate.

use async_trait::async_trait;
use mood_check_core::ports::{PortError, PortResult, TranslationService};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::port_error_from_reqwest;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TranslationService` using Google's `translate_a/single` API.
#[derive(Clone)]
pub struct GoogleTranslateAdapter {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslateAdapter {
    /// Creates a new `GoogleTranslateAdapter`.
    pub fn new(client: reqwest::Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

/// Rebuilds the translated text from the response body.
///
/// The body is a nested array whose first element lists segments in order;
/// each segment starts with the translated fragment, followed by the original.
pub fn reassemble_segments(body: &Value) -> PortResult<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| PortError::MalformedResponse("missing segment list".to_string()))?;

    let mut translated = String::new();
    for (index, segment) in segments.iter().enumerate() {
        let segment = segment.as_array().ok_or_else(|| {
            PortError::MalformedResponse(format!("segment {} is not an array", index))
        })?;
        match segment.first() {
            Some(Value::String(fragment)) => translated.push_str(fragment),
            Some(Value::Null) | None => {}
            Some(other) => {
                return Err(PortError::MalformedResponse(format!(
                    "segment {} has a non-text fragment: {}",
                    index, other
                )))
            }
        }
    }

    if translated.is_empty() {
        return Err(PortError::EmptyResponse);
    }
    Ok(translated)
}

//=========================================================================================
// `TranslationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TranslationService for GoogleTranslateAdapter {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
        timeout: Duration,
    ) -> PortResult<String> {
        let params = [
            ("client", "gtx"),
            ("sl", source_lang),
            ("tl", target_lang),
            ("dt", "t"),
            ("q", text),
        ];

        debug!(source_lang, target_lang, "Requesting translation.");
        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| port_error_from_reqwest(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Translation backend rejected the request.");
            return Err(PortError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| port_error_from_reqwest(e, timeout))?;

        reassemble_segments(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn concatenates_fragments_in_order() {
        let body = json!([
            [
                ["Zaindu zure burua. ", "Cuida de ti. ", null, null, 10],
                ["Atseden hartu.", "Descansa.", null, null, 10]
            ],
            null,
            "es"
        ]);
        assert_eq!(
            reassemble_segments(&body).unwrap(),
            "Zaindu zure burua. Atseden hartu."
        );
    }

    #[test]
    fn skips_null_and_empty_fragments() {
        let body = json!([[["Kaixo", "Hola"], [null, "x"], ["", "y"], [], [" mundua", "mundo"]]]);
        assert_eq!(reassemble_segments(&body).unwrap(), "Kaixo mundua");
    }

    #[test]
    fn rejects_unexpected_shapes() {
        for body in [
            json!({"sentences": []}),
            json!([]),
            json!([null]),
            json!([["not a segment"]]),
            json!([[[42, "Hola"]]]),
        ] {
            assert!(
                matches!(reassemble_segments(&body), Err(PortError::MalformedResponse(_))),
                "expected malformed for {}",
                body
            );
        }
    }

    #[test]
    fn empty_translation_is_reported() {
        assert_eq!(reassemble_segments(&json!([[]])), Err(PortError::EmptyResponse));
        assert_eq!(
            reassemble_segments(&json!([[["", "Hola"]]])),
            Err(PortError::EmptyResponse)
        );
    }
}
