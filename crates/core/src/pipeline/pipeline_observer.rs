use std::time::Instant;

/// Cross-cutting observer for pipeline orchestration events.
///
/// Decouples the use case from any output medium so callers can surface
/// stage progress and degraded-mode notes without changing orchestration
/// code.
pub trait PipelineObserver: Send {
    /// Record that a named stage finished and how long it took.
    fn stage_completed(&mut self, stage: &str, duration_ms: f64);

    /// Report a status or degraded-mode note.
    fn note(&mut self, message: &str);

    /// Emit an end-of-run summary. Default: no-op.
    fn summary(&self) {}
}

/// Silent observer for tests and embedding callers.
pub struct NullPipelineObserver;

impl PipelineObserver for NullPipelineObserver {
    fn stage_completed(&mut self, _stage: &str, _duration_ms: f64) {}
    fn note(&mut self, _message: &str) {}
}

/// Observer that forwards events to the log facade and keeps per-stage
/// durations for an end-of-run summary.
pub struct LogPipelineObserver {
    start_time: Instant,
    stages: Vec<(String, f64)>,
}

impl LogPipelineObserver {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            stages: Vec::new(),
        }
    }

    /// Formatted stage breakdown, or `None` if nothing ran.
    pub fn summary_string(&self) -> Option<String> {
        if self.stages.is_empty() {
            return None;
        }

        let elapsed_ms = self.start_time.elapsed().as_secs_f64() * 1000.0;
        let mut lines = vec![format!(
            "Pipeline summary ({:.1}s total):",
            elapsed_ms / 1000.0
        )];
        for (stage, ms) in &self.stages {
            let pct = if elapsed_ms > 0.0 {
                ms / elapsed_ms * 100.0
            } else {
                0.0
            };
            lines.push(format!("  {stage:12}: {ms:7.0}ms  ({pct:4.1}%)"));
        }
        Some(lines.join("\n"))
    }

    pub fn stages(&self) -> &[(String, f64)] {
        &self.stages
    }
}

impl Default for LogPipelineObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineObserver for LogPipelineObserver {
    fn stage_completed(&mut self, stage: &str, duration_ms: f64) {
        self.stages.push((stage.to_string(), duration_ms));
        log::debug!("{stage} finished in {duration_ms:.0}ms");
    }

    fn note(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn summary(&self) {
        if let Some(text) = self.summary_string() {
            log::info!("\n{text}");
        }
    }
}
