use super::audio_segment::AudioSegment;

/// Decoding search width used when accuracy matters more than latency.
pub const DEFAULT_BEAM_SIZE: usize = 5;
/// Greedy decoding, used by fast mode.
pub const FAST_BEAM_SIZE: usize = 1;

/// Decoding settings for a single transcription call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranscriptionOptions {
    /// Beam width for decoding; 1 means greedy search.
    pub beam_size: usize,
    /// Emit per-token timestamps during decoding.
    pub word_timestamps: bool,
}

impl TranscriptionOptions {
    pub fn accurate() -> Self {
        Self {
            beam_size: DEFAULT_BEAM_SIZE,
            word_timestamps: false,
        }
    }

    pub fn fast() -> Self {
        Self {
            beam_size: FAST_BEAM_SIZE,
            word_timestamps: false,
        }
    }
}

impl Default for TranscriptionOptions {
    fn default() -> Self {
        Self::accurate()
    }
}

/// Domain interface for speech-to-text transcription.
///
/// Implementations load their acoustic model once at construction and reuse
/// it across calls; `transcribe` must not reinitialize the model.
pub trait Transcriber: Send {
    /// Transcribe the audio, returning all recognized segment texts in
    /// temporal order joined with single spaces.
    fn transcribe(
        &self,
        audio: &AudioSegment,
        options: TranscriptionOptions,
    ) -> Result<String, Box<dyn std::error::Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_use_beam_search() {
        let options = TranscriptionOptions::default();
        assert_eq!(options.beam_size, 5);
        assert!(!options.word_timestamps);
    }

    #[test]
    fn test_fast_options_use_greedy_decoding() {
        let options = TranscriptionOptions::fast();
        assert_eq!(options.beam_size, 1);
    }

    #[test]
    fn test_accurate_is_the_default() {
        assert_eq!(TranscriptionOptions::default(), TranscriptionOptions::accurate());
    }
}
