use super::classification::Classification;
use super::language_model::LanguageModel;

/// Result of one classification exchange: the parsed record (or the default)
/// plus the unparsed reply kept for diagnostics.
#[derive(Debug, Clone)]
pub struct ClassificationOutcome {
    pub classification: Classification,
    /// Empty when the exchange itself failed.
    pub raw_response: String,
}

pub struct IntentClassifier;

impl IntentClassifier {
    /// Classify normalized text, degrading to the default record on any
    /// backend or parse failure. Never fails past this boundary.
    pub fn classify(backend: &dyn LanguageModel, text: &str) -> ClassificationOutcome {
        let prompt = Self::build_prompt(text);
        match backend.generate(&prompt) {
            Ok(raw) => {
                let classification = match Self::parse_response(&raw) {
                    Some(c) => c,
                    None => {
                        log::warn!("classification reply did not parse, using default record");
                        Classification::default()
                    }
                };
                ClassificationOutcome {
                    classification,
                    raw_response: raw,
                }
            }
            Err(e) => {
                log::warn!("classification request failed: {e}");
                ClassificationOutcome {
                    classification: Classification::default(),
                    raw_response: String::new(),
                }
            }
        }
    }

    /// Prompt embedding the text and the structured-output contract.
    pub fn build_prompt(text: &str) -> String {
        format!(
            "You are an intent and sentiment classifier for sales calls.

Text:
{text}

Classify:
- intent (pricing_objection, interest, complaint, purchase_intent, other)
- sentiment (positive, neutral, negative)
- entities (keywords)

Respond with a single JSON object and nothing else, for example:
{{\"intent\": \"other\", \"sentiment\": \"neutral\", \"entities\": [\"keyword\"]}}"
        )
    }

    /// Parse a reply into a classification, tolerating prose or code fences
    /// around the JSON object: the span from the first `{` to the last `}`
    /// is taken as the candidate object. None on any structural or enum
    /// mismatch.
    pub fn parse_response(raw: &str) -> Option<Classification> {
        let start = raw.find('{')?;
        let end = raw.rfind('}')?;
        if end < start {
            return None;
        }
        serde_json::from_str(&raw[start..=end]).ok()
    }
}
