//! crates/mood_check_core/src/scoring.rs
//!
//! The deterministic wellbeing score. Four answers carry fixed weights that
//! add up to at most `MAX_SCORE`; the free-text answers are context only.

use crate::domain::{
    Assessment, EmotionalClimate, PhysicalSymptoms, ScoreResult, WellbeingLevel,
};

/// Highest reachable score: 10 + 10 + 10 + 10.
pub const MAX_SCORE: u8 = 40;

/// Scores an assessment. Pure and total.
pub fn compute(assessment: &Assessment) -> ScoreResult {
    let climate = match assessment.emotional_climate {
        EmotionalClimate::Positive => 10,
        EmotionalClimate::Negative => 0,
    };
    let symptoms = match assessment.physical_symptoms {
        PhysicalSymptoms::Positive => 10,
        PhysicalSymptoms::Neutral => 5,
        PhysicalSymptoms::Negative => 0,
    };
    let score = climate
        + assessment.mental_peace.value()
        + symptoms
        + assessment.physical_strength.value() * 2;

    let percentage = percentage_of(score, MAX_SCORE);

    ScoreResult {
        score,
        max_score: MAX_SCORE,
        percentage,
        level: level_for(percentage),
    }
}

/// `round(score / max * 100)` with halves rounded up, in integer arithmetic.
fn percentage_of(score: u8, max: u8) -> u8 {
    let score = u32::from(score);
    let max = u32::from(max);
    ((score * 200 + max) / (max * 2)) as u8
}

/// Maps a percentage onto its level. Boundaries belong to the upper bucket.
pub fn level_for(percentage: u8) -> WellbeingLevel {
    match percentage {
        0..=29 => WellbeingLevel::Low,
        30..=49 => WellbeingLevel::Medium,
        50..=74 => WellbeingLevel::Good,
        _ => WellbeingLevel::Great,
    }
}
