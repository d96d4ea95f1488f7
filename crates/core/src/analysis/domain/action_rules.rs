use super::classification::{Classification, Intent, Sentiment};

/// One row of the action table. `sentiment: None` matches any sentiment.
pub struct ActionRule {
    pub intent: Intent,
    pub sentiment: Option<Sentiment>,
    pub action: &'static str,
}

/// The action table, scanned top to bottom; the first matching row wins.
///
/// **Priority rule:** row order is the tie-breaking contract. A negative
/// pricing objection must hit the empathy row before the generic pricing
/// row, so the rows may not be reordered.
pub const ACTION_RULES: &[ActionRule] = &[
    ActionRule {
        intent: Intent::PricingObjection,
        sentiment: Some(Sentiment::Negative),
        action: "Empathize with concern, then explain ROI before discount",
    },
    ActionRule {
        intent: Intent::PricingObjection,
        sentiment: None,
        action: "Explain pricing structure clearly",
    },
    ActionRule {
        intent: Intent::Complaint,
        sentiment: None,
        action: "Acknowledge issue and ask clarifying question",
    },
    ActionRule {
        intent: Intent::PurchaseIntent,
        sentiment: None,
        action: "Move to close and discuss onboarding",
    },
];

/// Action returned when no table row matches.
pub const DEFAULT_ACTION: &str = "Provide general clarification";

/// Map a classification to the scripted next action for the agent.
/// Total and deterministic: every (intent, sentiment) pair yields exactly
/// one action, no I/O, no failure mode.
pub fn decide_action(classification: &Classification) -> &'static str {
    ACTION_RULES
        .iter()
        .find(|rule| {
            rule.intent == classification.intent
                && rule.sentiment.map_or(true, |s| s == classification.sentiment)
        })
        .map(|rule| rule.action)
        .unwrap_or(DEFAULT_ACTION)
}
