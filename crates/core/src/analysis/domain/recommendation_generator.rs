use super::classification::Classification;
use super::language_model::LanguageModel;
use super::recommendation_sanitizer::sanitize_recommendation;

/// Result of one coaching exchange: the sanitized advice (empty on failure)
/// plus the unparsed reply kept for diagnostics.
#[derive(Debug, Clone)]
pub struct RecommendationOutcome {
    pub recommendation: String,
    /// Empty when the exchange itself failed.
    pub raw_response: String,
}

pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Ask the backend for one short piece of coaching advice and sanitize
    /// the reply. Degrades to an empty string on any failure, never fails
    /// past this boundary.
    pub fn recommend(
        backend: &dyn LanguageModel,
        classification: &Classification,
    ) -> RecommendationOutcome {
        let prompt = Self::build_prompt(classification);
        match backend.generate(&prompt) {
            Ok(raw) => RecommendationOutcome {
                recommendation: sanitize_recommendation(&raw),
                raw_response: raw,
            },
            Err(e) => {
                log::warn!("recommendation request failed: {e}");
                RecommendationOutcome {
                    recommendation: String::new(),
                    raw_response: String::new(),
                }
            }
        }
    }

    /// Coaching prompt embedding the classification, entities comma-joined.
    pub fn build_prompt(classification: &Classification) -> String {
        format!(
            "You are a sales coach.

Based on:
Intent: {}
Sentiment: {}
Entities: {}

Give ONE short recommendation for the sales agent.",
            classification.intent,
            classification.sentiment,
            classification.entities.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::classification::{Intent, Sentiment};

    // --- Stubs ---

    struct StubBackend {
        reply: Option<String>,
    }

    impl LanguageModel for StubBackend {
        fn is_reachable(&self) -> bool {
            self.reply.is_some()
        }

        fn generate(&self, _prompt: &str) -> Result<String, Box<dyn std::error::Error>> {
            match &self.reply {
                Some(r) => Ok(r.clone()),
                None => Err("connection reset".into()),
            }
        }
    }

    fn pricing_classification() -> Classification {
        Classification {
            intent: Intent::PricingObjection,
            sentiment: Sentiment::Negative,
            entities: vec!["price".to_string(), "contract".to_string()],
        }
    }

    #[test]
    fn test_recommend_sanitizes_the_reply() {
        let backend = StubBackend {
            reply: Some("Recommendation: offer a phased rollout".to_string()),
        };
        let outcome = RecommendationGenerator::recommend(&backend, &pricing_classification());
        assert_eq!(outcome.recommendation, "offer a phased rollout");
        assert_eq!(outcome.raw_response, "Recommendation: offer a phased rollout");
    }

    #[test]
    fn test_recommend_returns_empty_on_backend_failure() {
        let backend = StubBackend { reply: None };
        let outcome = RecommendationGenerator::recommend(&backend, &pricing_classification());
        assert_eq!(outcome.recommendation, "");
        assert_eq!(outcome.raw_response, "");
    }

    #[test]
    fn test_build_prompt_embeds_classification_tokens() {
        let prompt = RecommendationGenerator::build_prompt(&pricing_classification());
        assert!(prompt.contains("Intent: pricing_objection"));
        assert!(prompt.contains("Sentiment: negative"));
        assert!(prompt.contains("Entities: price, contract"));
        assert!(prompt.contains("ONE short recommendation"));
    }

    #[test]
    fn test_build_prompt_with_no_entities() {
        let prompt = RecommendationGenerator::build_prompt(&Classification::default());
        assert!(prompt.contains("Entities: \n"));
    }
}
