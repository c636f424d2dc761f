pub mod domain;
pub mod enrichment;
pub mod ports;
pub mod scoring;

pub use domain::{
    AnalysisRequest, Assessment, AssessmentError, EmotionalClimate, EnrichmentResult,
    MentalPeace, PhysicalStrength, PhysicalSymptoms, ScoreResult, WellbeingLevel,
};
pub use enrichment::{EnrichmentOrchestrator, EnrichmentSettings};
pub use ports::{AnalysisGenerationService, PortError, PortResult, TranslationService};

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::domain::{
        Assessment, EmotionalClimate, MentalPeace, PhysicalStrength, PhysicalSymptoms,
    };

    /// An assessment with the four scored answers set and neutral free text.
    pub fn assessment(
        climate: EmotionalClimate,
        peace: i64,
        symptoms: PhysicalSymptoms,
        strength: i64,
    ) -> Assessment {
        Assessment {
            current_feeling: "normal, algo cansado, bien".to_string(),
            emotional_climate: climate,
            dominant_emotion: "calma".to_string(),
            mental_peace: MentalPeace::new(peace).unwrap(),
            physical_symptoms: symptoms,
            physical_strength: PhysicalStrength::new(strength).unwrap(),
            body_request: "un paseo".to_string(),
            calm_disruptor: "algunas preocupaciones".to_string(),
            energy_drain: "nada especial".to_string(),
            happiness_definition: "momentos de paz".to_string(),
        }
    }
}
