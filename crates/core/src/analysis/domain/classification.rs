use serde::{Deserialize, Serialize};

/// Categorized purpose of an utterance within a sales conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PricingObjection,
    Interest,
    Complaint,
    PurchaseIntent,
    Other,
}

impl Intent {
    pub const ALL: &[Intent] = &[
        Intent::PricingObjection,
        Intent::Interest,
        Intent::Complaint,
        Intent::PurchaseIntent,
        Intent::Other,
    ];
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::PricingObjection => write!(f, "pricing_objection"),
            Intent::Interest => write!(f, "interest"),
            Intent::Complaint => write!(f, "complaint"),
            Intent::PurchaseIntent => write!(f, "purchase_intent"),
            Intent::Other => write!(f, "other"),
        }
    }
}

/// Coarse emotional polarity of an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: &[Sentiment] = &[Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Neutral => write!(f, "neutral"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Structured classification of one normalized utterance.
///
/// `entities` keeps the keyword order the backend returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    pub sentiment: Sentiment,
    pub entities: Vec<String>,
}

impl Default for Classification {
    /// The safe fallback used whenever no classification can be obtained.
    fn default() -> Self {
        Self {
            intent: Intent::Other,
            sentiment: Sentiment::Neutral,
            entities: Vec::new(),
        }
    }
}
