use std::path::Path;
use std::time::Instant;

use crate::analysis::domain::action_rules::decide_action;
use crate::analysis::domain::classification::Classification;
use crate::analysis::domain::intent_classifier::IntentClassifier;
use crate::analysis::domain::language_model::LanguageModel;
use crate::analysis::domain::recommendation_generator::RecommendationGenerator;
use crate::analysis::domain::text_normalizer::TextNormalizer;
use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::transcriber::{Transcriber, TranscriptionOptions};
use crate::pipeline::call_analysis::CallAnalysis;
use crate::pipeline::pipeline_observer::PipelineObserver;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Straight-line call-analysis pipeline: decode, transcribe, normalize,
/// classify, decide, recommend.
///
/// This is the single place that absorbs sub-step failures: `run` always
/// returns a complete record, with degraded fields instead of errors.
pub struct AnalyzeCallUseCase {
    reader: Box<dyn AudioReader>,
    transcriber: Box<dyn Transcriber>,
    normalizer: TextNormalizer,
    backend: Box<dyn LanguageModel>,
    observer: Box<dyn PipelineObserver>,
}

impl AnalyzeCallUseCase {
    pub fn new(
        reader: Box<dyn AudioReader>,
        transcriber: Box<dyn Transcriber>,
        backend: Box<dyn LanguageModel>,
        observer: Box<dyn PipelineObserver>,
    ) -> Self {
        Self {
            reader,
            transcriber,
            normalizer: TextNormalizer::new(),
            backend,
            observer,
        }
    }

    pub fn run(&mut self, audio_path: &Path, fast: bool) -> CallAnalysis {
        let options = if fast {
            TranscriptionOptions::fast()
        } else {
            TranscriptionOptions::default()
        };

        // 1. Decode the file to mono PCM at the model's sample rate
        let start = Instant::now();
        let decoded = self.reader.read_audio(audio_path, WHISPER_SAMPLE_RATE);
        self.observer.stage_completed("decode", elapsed_ms(start));

        // 2. Transcribe; decode or inference failures flow on as empty text
        let start = Instant::now();
        let transcribed =
            decoded.and_then(|audio| self.transcriber.transcribe(&audio, options));
        let (raw_text, error) = match transcribed {
            Ok(text) => (text, String::new()),
            Err(e) => {
                let message = format!("Transcription failed: {e}");
                log::warn!("{message}");
                self.observer.note(&message);
                (String::new(), message)
            }
        };
        self.observer.stage_completed("transcribe", elapsed_ms(start));

        // 3. Normalize
        let cleaned_text = self.normalizer.clean(&raw_text);

        // 4. Probe the backend once; the result gates both exchanges
        let ollama_reachable = self.backend.is_reachable();

        // 5. Classify, or fall back to the default record
        let start = Instant::now();
        let (classification, raw_intent_response) = if ollama_reachable {
            let outcome = IntentClassifier::classify(self.backend.as_ref(), &cleaned_text);
            (outcome.classification, outcome.raw_response)
        } else {
            self.observer
                .note("Ollama unreachable, using default classification");
            (Classification::default(), String::new())
        };
        self.observer.stage_completed("classify", elapsed_ms(start));

        // 6. Decide the scripted action
        let action = decide_action(&classification).to_string();

        // 7. Recommend, or fall back to the empty string
        let start = Instant::now();
        let (recommendation, raw_recommendation_response) = if ollama_reachable {
            let outcome =
                RecommendationGenerator::recommend(self.backend.as_ref(), &classification);
            (outcome.recommendation, outcome.raw_response)
        } else {
            (String::new(), String::new())
        };
        self.observer.stage_completed("recommend", elapsed_ms(start));
        self.observer.summary();

        CallAnalysis {
            raw_text,
            cleaned_text,
            intent: classification.intent,
            sentiment: classification.sentiment,
            entities: classification.entities,
            action,
            recommendation,
            error,
            ollama_reachable,
            raw_intent_response,
            raw_recommendation_response,
        }
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
