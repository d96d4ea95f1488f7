pub mod ffmpeg_audio_reader;
pub mod whisper_transcriber;
