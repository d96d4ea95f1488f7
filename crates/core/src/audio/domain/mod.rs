pub mod audio_reader;
pub mod audio_segment;
pub mod transcriber;
