use std::path::PathBuf;
use std::process;

use clap::Parser;

use callsense_core::analysis::domain::language_model::LanguageModel;
use callsense_core::analysis::infrastructure::ollama_backend::OllamaBackend;
use callsense_core::audio::domain::audio_reader::AudioReader;
use callsense_core::audio::domain::transcriber::Transcriber;
use callsense_core::audio::infrastructure::ffmpeg_audio_reader::FfmpegAudioReader;
use callsense_core::audio::infrastructure::whisper_transcriber::WhisperTranscriber;
use callsense_core::pipeline::analyze_call_use_case::AnalyzeCallUseCase;
use callsense_core::pipeline::call_analysis::CallAnalysis;
use callsense_core::pipeline::pipeline_observer::{LogPipelineObserver, PipelineObserver};
use callsense_core::shared::constants::{
    OLLAMA_DEFAULT_HOST, OLLAMA_DEFAULT_MODEL, OLLAMA_DEFAULT_PORT, WHISPER_MODEL_NAME,
    WHISPER_MODEL_URL,
};
use callsense_core::shared::model_resolver;

/// Sales-call analysis: transcribe a recording, classify intent and
/// sentiment, and suggest the next coaching action.
#[derive(Parser)]
#[command(name = "callsense")]
struct Cli {
    /// Input audio file (any format ffmpeg can decode).
    input: PathBuf,

    /// Trade transcription accuracy for speed (greedy decoding).
    #[arg(long)]
    fast: bool,

    /// Path to a Whisper GGML model (downloaded automatically if omitted).
    #[arg(long)]
    model: Option<PathBuf>,

    /// Ollama server host.
    #[arg(long, default_value = OLLAMA_DEFAULT_HOST)]
    ollama_host: String,

    /// Ollama server port.
    #[arg(long, default_value_t = OLLAMA_DEFAULT_PORT)]
    ollama_port: u16,

    /// Ollama model used for classification and coaching.
    #[arg(long, default_value = OLLAMA_DEFAULT_MODEL)]
    ollama_model: String,

    /// Print the analysis record as JSON instead of a report.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let transcriber = build_transcriber(&cli)?;
    let reader: Box<dyn AudioReader> = Box::new(FfmpegAudioReader);
    let backend: Box<dyn LanguageModel> = Box::new(OllamaBackend::new(
        &cli.ollama_host,
        cli.ollama_port,
        &cli.ollama_model,
    ));
    let observer: Box<dyn PipelineObserver> = Box::new(LogPipelineObserver::new());

    let mut use_case = AnalyzeCallUseCase::new(reader, transcriber, backend, observer);
    let analysis = use_case.run(&cli.input, cli.fast);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        print_report(&analysis);
    }

    Ok(())
}

fn build_transcriber(cli: &Cli) -> Result<Box<dyn Transcriber>, Box<dyn std::error::Error>> {
    let model_path = match &cli.model {
        Some(path) => path.clone(),
        None => {
            log::info!("Resolving model: {WHISPER_MODEL_NAME}");
            let path = model_resolver::resolve(
                WHISPER_MODEL_NAME,
                WHISPER_MODEL_URL,
                Some(Box::new(download_progress)),
            )?;
            eprintln!();
            path
        }
    };
    Ok(Box::new(WhisperTranscriber::new(&model_path)?))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if let Some(model) = &cli.model {
        if !model.exists() {
            return Err(format!("Model file not found: {}", model.display()).into());
        }
    }
    Ok(())
}

fn print_report(analysis: &CallAnalysis) {
    println!("RAW TRANSCRIPT:");
    println!("{}", analysis.raw_text);
    println!();
    println!("CLEANED TEXT:");
    println!("{}", analysis.cleaned_text);
    println!();
    println!("Detected intent: {}", analysis.intent);
    println!("Detected sentiment: {}", analysis.sentiment);
    if !analysis.entities.is_empty() {
        println!("Entities: {}", analysis.entities.join(", "));
    }
    println!("Sales action: {}", analysis.action);
    println!("Sales recommendation: {}", analysis.recommendation);

    if !analysis.ollama_reachable {
        println!();
        println!("Note: Ollama was unreachable, classification and coaching were skipped.");
    }
    if !analysis.error.is_empty() {
        println!();
        println!("Warning: {}", analysis.error);
    }
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
