use std::time::Duration;

pub const WHISPER_MODEL_NAME: &str = "ggml-small.bin";
pub const WHISPER_MODEL_URL: &str =
    "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-small.bin";

pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const OLLAMA_DEFAULT_HOST: &str = "localhost";
pub const OLLAMA_DEFAULT_PORT: u16 = 11434;
pub const OLLAMA_DEFAULT_MODEL: &str = "neural-chat";

/// Timeout for the pre-flight TCP probe of the Ollama service.
pub const OLLAMA_PROBE_TIMEOUT: Duration = Duration::from_secs(1);
