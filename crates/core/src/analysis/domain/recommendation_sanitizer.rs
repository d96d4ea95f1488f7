/// Line prefixes that mark an echoed prompt template rather than advice.
pub const TEMPLATE_ECHO_PREFIXES: &[&str] = &[
    "Intent:",
    "Sentiment:",
    "Entities:",
    "Based on:",
    "Give",
    "Classify:",
    "Text:",
];

/// Preamble phrases stripped from the head of a reply, at most one,
/// case-insensitive. The list is best-effort: novel phrasings pass through.
pub const PREAMBLES: &[&str] = &[
    "One short recommendation for the sales agent could be to ",
    "One short recommendation for the sales agent is to ",
    "A short recommendation for the sales agent could be to ",
    "The recommendation for the sales agent is to ",
    "A good recommendation is to ",
    "I recommend that the sales agent ",
    "Recommendation: ",
];

/// Best-effort cleanup of a coaching reply: drop echoed template lines,
/// rejoin the survivors with single spaces, strip one leading preamble.
pub fn sanitize_recommendation(text: &str) -> String {
    let kept: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !TEMPLATE_ECHO_PREFIXES.iter().any(|p| line.starts_with(p)))
        .collect();

    let joined = kept.join(" ");
    strip_one_preamble(joined.trim()).to_string()
}

fn strip_one_preamble(text: &str) -> &str {
    for preamble in PREAMBLES {
        if let Some(rest) = strip_prefix_ignore_ascii_case(text, preamble) {
            return rest.trim_start();
        }
    }
    text
}

/// Case-insensitive ASCII prefix strip. The byte-length slice is in bounds
/// on a char boundary because a match forces the leading bytes to be ASCII.
fn strip_prefix_ignore_ascii_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let n = prefix.len();
    if text.len() >= n && text.as_bytes()[..n].eq_ignore_ascii_case(prefix.as_bytes()) {
        Some(&text[n..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_passes_through() {
        assert_eq!(
            sanitize_recommendation("Offer a volume discount tied to an annual contract."),
            "Offer a volume discount tied to an annual contract."
        );
    }

    #[test]
    fn test_template_echo_lines_are_dropped() {
        let reply = "Intent: pricing_objection\nSentiment: negative\nEntities: price\nOffer a payment plan.";
        let sanitized = sanitize_recommendation(reply);
        assert_eq!(sanitized, "Offer a payment plan.");
        assert!(!sanitized.contains("Intent:"));
        assert!(!sanitized.contains("Sentiment:"));
    }

    #[test]
    fn test_give_echo_line_is_dropped() {
        let reply = "Give ONE short recommendation for the sales agent.\nAsk about their budget cycle.";
        assert_eq!(
            sanitize_recommendation(reply),
            "Ask about their budget cycle."
        );
    }

    #[test]
    fn test_preamble_is_stripped_case_insensitively() {
        assert_eq!(
            sanitize_recommendation("RECOMMENDATION: follow up tomorrow"),
            "follow up tomorrow"
        );
        assert_eq!(
            sanitize_recommendation("I recommend that the sales agent follow up tomorrow"),
            "follow up tomorrow"
        );
    }

    #[test]
    fn test_only_the_first_matching_preamble_is_stripped() {
        let reply = "Recommendation: I recommend that the sales agent slow down";
        assert_eq!(
            sanitize_recommendation(reply),
            "I recommend that the sales agent slow down"
        );
    }

    #[test]
    fn test_preamble_in_the_middle_is_kept() {
        let reply = "Try this. Recommendation: be brief";
        assert_eq!(sanitize_recommendation(reply), reply);
    }

    #[test]
    fn test_surviving_lines_join_with_single_spaces() {
        let reply = "Based on: the call\n\n  Listen first.  \n\n  Then summarize.  ";
        assert_eq!(sanitize_recommendation(reply), "Listen first. Then summarize.");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(sanitize_recommendation(""), "");
    }

    #[test]
    fn test_all_lines_echoes_yields_empty_output() {
        let reply = "Intent: other\nSentiment: neutral\nEntities:";
        assert_eq!(sanitize_recommendation(reply), "");
    }

    #[test]
    fn test_non_ascii_reply_is_handled() {
        let reply = "Répondez avec empathie, puis recentrez sur la valeur.";
        assert_eq!(sanitize_recommendation(reply), reply);
    }
}
