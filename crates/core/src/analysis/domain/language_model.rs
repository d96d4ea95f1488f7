/// Domain interface for the locally hosted language-model service.
///
/// Both pipeline exchanges (classification and coaching) go through
/// `generate`; every call is attempt-once, no retries.
pub trait LanguageModel: Send {
    /// Cheap pre-flight availability check; must fail fast, not retry.
    fn is_reachable(&self) -> bool;

    /// One-shot prompt/response exchange returning the raw reply text.
    fn generate(&self, prompt: &str) -> Result<String, Box<dyn std::error::Error>>;
}
