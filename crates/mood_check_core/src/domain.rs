//! crates/mood_check_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use std::fmt;
use std::str::FromStr;

//=========================================================================================
// Validation Error
//=========================================================================================

/// Raised when raw questionnaire answers cannot be turned into an `Assessment`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: u8,
        max: u8,
        value: i64,
    },
    #[error("{field} has unknown value '{value}' (expected one of: {expected})")]
    UnknownCategory {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl AssessmentError {
    /// The name of the answer that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::OutOfRange { field, .. } | Self::UnknownCategory { field, .. } => field,
        }
    }
}

//=========================================================================================
// Categorical Answers
//=========================================================================================

/// How the person describes their emotional weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmotionalClimate {
    Positive,
    Negative,
}

impl EmotionalClimate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
        }
    }
}

impl FromStr for EmotionalClimate {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "negative" => Ok(Self::Negative),
            other => Err(AssessmentError::UnknownCategory {
                field: "emotional_climate",
                value: other.to_string(),
                expected: "positive, negative",
            }),
        }
    }
}

/// How the body has been feeling physically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalSymptoms {
    Positive,
    Neutral,
    Negative,
}

impl PhysicalSymptoms {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl FromStr for PhysicalSymptoms {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Self::Positive),
            "neutral" => Ok(Self::Neutral),
            "negative" => Ok(Self::Negative),
            other => Err(AssessmentError::UnknownCategory {
                field: "physical_symptoms",
                value: other.to_string(),
                expected: "positive, neutral, negative",
            }),
        }
    }
}

//=========================================================================================
// Bounded Answers
//=========================================================================================

/// Self-rated mental peace, 1 to 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MentalPeace(u8);

impl MentalPeace {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i64) -> Result<Self, AssessmentError> {
        bounded("mental_peace", value, Self::MIN, Self::MAX).map(Self)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

/// Self-rated physical strength, 1 to 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalStrength(u8);

impl PhysicalStrength {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Result<Self, AssessmentError> {
        bounded("physical_strength", value, Self::MIN, Self::MAX).map(Self)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

fn bounded(field: &'static str, value: i64, min: u8, max: u8) -> Result<u8, AssessmentError> {
    if (i64::from(min)..=i64::from(max)).contains(&value) {
        Ok(value as u8)
    } else {
        Err(AssessmentError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    }
}

//=========================================================================================
// Assessment
//=========================================================================================

/// One completed questionnaire submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// Three words describing how the person feels right now.
    pub current_feeling: String,
    pub emotional_climate: EmotionalClimate,
    /// Dominant emotion over the last 24 hours.
    pub dominant_emotion: String,
    pub mental_peace: MentalPeace,
    pub physical_symptoms: PhysicalSymptoms,
    pub physical_strength: PhysicalStrength,
    /// What the body is asking for.
    pub body_request: String,
    /// What takes away calm.
    pub calm_disruptor: String,
    /// Who or what drains energy.
    pub energy_drain: String,
    /// The person's own definition of happiness.
    pub happiness_definition: String,
}

//=========================================================================================
// Derived Results
//=========================================================================================

/// Qualitative bucket derived from the score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellbeingLevel {
    Low,
    Medium,
    Good,
    Great,
}

impl WellbeingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Good => "good",
            Self::Great => "great",
        }
    }
}

impl fmt::Display for WellbeingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The deterministic score computed for an `Assessment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResult {
    pub score: u8,
    pub max_score: u8,
    pub percentage: u8,
    pub level: WellbeingLevel,
}

/// The best-effort advice attached to a scored assessment.
///
/// Availability is derived from the text, so the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnrichmentResult {
    text: Option<String>,
}

impl EnrichmentResult {
    pub fn unavailable() -> Self {
        Self { text: None }
    }

    pub fn with_text(text: String) -> Self {
        Self { text: Some(text) }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_available(&self) -> bool {
        self.text.is_some()
    }

    pub fn into_text(self) -> Option<String> {
        self.text
    }
}

/// The payload handed to the analysis generator for a single request.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    pub assessment: &'a Assessment,
    pub score: &'a ScoreResult,
}

impl<'a> AnalysisRequest<'a> {
    pub fn new(assessment: &'a Assessment, score: &'a ScoreResult) -> Self {
        Self { assessment, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_parse_their_wire_keywords() {
        assert_eq!("positive".parse::<EmotionalClimate>(), Ok(EmotionalClimate::Positive));
        assert_eq!("negative".parse::<EmotionalClimate>(), Ok(EmotionalClimate::Negative));
        assert_eq!("neutral".parse::<PhysicalSymptoms>(), Ok(PhysicalSymptoms::Neutral));
        assert_eq!(PhysicalSymptoms::Negative.as_str(), "negative");
    }

    #[test]
    fn climate_has_no_neutral_value() {
        let err = "neutral".parse::<EmotionalClimate>().unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::UnknownCategory { field: "emotional_climate", .. }
        ));
    }

    #[test]
    fn category_parsing_is_case_sensitive() {
        assert!("Positive".parse::<PhysicalSymptoms>().is_err());
    }

    #[test]
    fn bounded_answers_accept_their_full_range() {
        for v in 1..=10 {
            assert_eq!(MentalPeace::new(v).unwrap().value() as i64, v);
        }
        for v in 1..=5 {
            assert_eq!(PhysicalStrength::new(v).unwrap().value() as i64, v);
        }
    }

    #[test]
    fn bounded_answers_reject_values_outside_range() {
        assert_eq!(
            MentalPeace::new(11),
            Err(AssessmentError::OutOfRange {
                field: "mental_peace",
                min: 1,
                max: 10,
                value: 11
            })
        );
        assert!(MentalPeace::new(0).is_err());
        assert!(PhysicalStrength::new(6).is_err());
        assert!(PhysicalStrength::new(-1).is_err());
        assert!(PhysicalStrength::new(i64::MAX).is_err());
    }

    #[test]
    fn errors_report_the_failing_field() {
        assert_eq!(MentalPeace::new(0).unwrap_err().field(), "mental_peace");
        assert_eq!(PhysicalStrength::new(9).unwrap_err().field(), "physical_strength");
        assert_eq!("x".parse::<PhysicalSymptoms>().unwrap_err().field(), "physical_symptoms");
    }

    #[test]
    fn enrichment_availability_follows_text() {
        assert!(!EnrichmentResult::unavailable().is_available());
        let result = EnrichmentResult::with_text("Descansa un poco.".to_string());
        assert!(result.is_available());
        assert_eq!(result.text(), Some("Descansa un poco."));
    }
}
