use regex::Regex;

/// Filler tokens stripped from transcripts when they appear as whole words.
pub const FILLER_WORDS: &[&str] = &["uh", "um", "you know", "like"];

/// Deterministic transcript cleaner: lowercase, strip fillers, collapse
/// whitespace, trim. Applying it twice yields the same result as once.
pub struct TextNormalizer {
    filler: Regex,
    whitespace: Regex,
}

impl TextNormalizer {
    pub fn new() -> Self {
        let pattern = format!(r"\b({})\b", FILLER_WORDS.join("|"));
        Self {
            filler: Regex::new(&pattern).expect("valid filler pattern"),
            whitespace: Regex::new(r"\s+").expect("valid whitespace pattern"),
        }
    }

    pub fn clean(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let no_fillers = self.filler.replace_all(&lowered, "");
        let collapsed = self.whitespace.replace_all(&no_fillers, " ");
        collapsed.trim().to_string()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_clean_lowercases() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean("The PRICE is High"), "the price is high");
    }

    #[test]
    fn test_clean_removes_standalone_fillers() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.clean("um hello uh there world"),
            "hello there world"
        );
    }

    #[test]
    fn test_clean_removes_you_know_phrase() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.clean("the deal is you know almost done"),
            "the deal is almost done"
        );
    }

    #[test]
    fn test_clean_keeps_embedded_filler_substrings() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.clean("she likes the umbrella, unlikely as that is"),
            "she likes the umbrella, unlikely as that is"
        );
    }

    #[test]
    fn test_clean_collapses_whitespace_and_trims() {
        let normalizer = TextNormalizer::new();
        assert_eq!(
            normalizer.clean("  too   much\t\twhitespace \n here  "),
            "too much whitespace here"
        );
    }

    #[test]
    fn test_clean_keeps_punctuation_around_removed_fillers() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean("um, right"), ", right");
    }

    #[test]
    fn test_clean_empty_string() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean(""), "");
    }

    #[test]
    fn test_clean_all_fillers_yields_empty() {
        let normalizer = TextNormalizer::new();
        assert_eq!(normalizer.clean("uh um you know like"), "");
    }

    #[rstest]
    #[case::mixed_case_fillers("Um, you know the Price is LIKE way too high")]
    #[case::whitespace_runs("  lots \t of\n\nspace  ")]
    #[case::no_fillers("a perfectly clean sentence")]
    #[case::only_fillers("uh uh um um")]
    #[case::empty("")]
    fn test_clean_is_idempotent(#[case] input: &str) {
        let normalizer = TextNormalizer::new();
        let once = normalizer.clean(input);
        let twice = normalizer.clean(&once);
        assert_eq!(once, twice);
    }

    #[rstest]
    #[case("well uh I think")]
    #[case("um well um")]
    #[case("it is like you know fine")]
    fn test_clean_leaves_no_standalone_fillers(#[case] input: &str) {
        let normalizer = TextNormalizer::new();
        let cleaned = normalizer.clean(input);
        for token in cleaned.split_whitespace() {
            assert!(
                !FILLER_WORDS.contains(&token),
                "filler {token:?} survived in {cleaned:?}"
            );
        }
        assert!(!cleaned.contains("you know"));
    }
}
