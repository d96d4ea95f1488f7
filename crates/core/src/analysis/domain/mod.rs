pub mod action_rules;
pub mod classification;
pub mod intent_classifier;
pub mod language_model;
pub mod recommendation_generator;
pub mod recommendation_sanitizer;
pub mod text_normalizer;
