use serde::Serialize;

use crate::analysis::domain::classification::{Intent, Sentiment};

/// Complete outcome of one pipeline run.
///
/// Always fully populated: a degraded run carries default classification
/// fields, empty strings, and a non-empty `error` or a false
/// `ollama_reachable` flag rather than missing fields.
#[derive(Debug, Clone, Serialize)]
pub struct CallAnalysis {
    pub raw_text: String,
    pub cleaned_text: String,
    pub intent: Intent,
    pub sentiment: Sentiment,
    pub entities: Vec<String>,
    pub action: String,
    pub recommendation: String,
    /// Empty when transcription succeeded.
    pub error: String,
    pub ollama_reachable: bool,
    pub raw_intent_response: String,
    pub raw_recommendation_response: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CallAnalysis {
        CallAnalysis {
            raw_text: "The price is too high".to_string(),
            cleaned_text: "the price is too high".to_string(),
            intent: Intent::PricingObjection,
            sentiment: Sentiment::Negative,
            entities: vec!["price".to_string()],
            action: "Empathize with concern, then explain ROI before discount".to_string(),
            recommendation: "offer a phased rollout".to_string(),
            error: String::new(),
            ollama_reachable: true,
            raw_intent_response: "{}".to_string(),
            raw_recommendation_response: "offer a phased rollout".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_the_documented_key_set() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();

        let documented = [
            "raw_text",
            "cleaned_text",
            "intent",
            "sentiment",
            "entities",
            "action",
            "recommendation",
            "error",
            "ollama_reachable",
            "raw_intent_response",
            "raw_recommendation_response",
        ];
        assert_eq!(obj.len(), documented.len());
        for key in documented {
            assert!(obj.contains_key(key), "missing key {key:?}");
        }
    }

    #[test]
    fn test_enum_fields_serialize_as_snake_case_tokens() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["intent"], "pricing_objection");
        assert_eq!(value["sentiment"], "negative");
        assert_eq!(value["ollama_reachable"], true);
    }
}
