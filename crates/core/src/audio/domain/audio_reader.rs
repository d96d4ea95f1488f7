use crate::audio::domain::audio_segment::AudioSegment;
use std::path::Path;

/// Domain interface for decoding an audio file.
pub trait AudioReader: Send {
    /// Decode the file to a mono PCM AudioSegment at the given sample rate.
    /// A file without an audio stream is an error.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
