use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelResolveError {
    #[error("failed to create cache directory: {0}")]
    CacheDir(#[source] std::io::Error),
    #[error("download failed for {url}: {source}")]
    Download {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to write model to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not determine cache directory")]
    NoCacheDir,
}

/// Progress callback: `(bytes_downloaded, total_bytes)`.
/// `total_bytes` is 0 if the server didn't provide Content-Length.
pub type ProgressFn = Box<dyn Fn(u64, u64) + Send>;

/// Report download progress in 1 MiB steps to keep callbacks cheap.
const PROGRESS_STEP: u64 = 1024 * 1024;

/// Resolve a model file by name: return it from the user cache if present,
/// otherwise download it there from `url`.
pub fn resolve(
    name: &str,
    url: &str,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ModelResolveError> {
    let cache_dir = model_cache_dir()?;
    resolve_in(&cache_dir, name, url, progress)
}

/// Same as [`resolve`] but against an explicit cache directory.
pub fn resolve_in(
    cache_dir: &Path,
    name: &str,
    url: &str,
    progress: Option<ProgressFn>,
) -> Result<PathBuf, ModelResolveError> {
    let cached_path = cache_dir.join(name);
    if cached_path.exists() {
        return Ok(cached_path);
    }

    fs::create_dir_all(cache_dir).map_err(ModelResolveError::CacheDir)?;
    download(url, &cached_path, progress)?;
    Ok(cached_path)
}

/// Platform-specific model cache directory.
///
/// - Linux: `$XDG_CACHE_HOME/callsense/models/` or `~/.cache/callsense/models/`
/// - macOS: `~/Library/Caches/callsense/models/`
/// - Windows: `%LOCALAPPDATA%/callsense/models/`
pub fn model_cache_dir() -> Result<PathBuf, ModelResolveError> {
    dirs::cache_dir()
        .map(|d| d.join("callsense").join("models"))
        .ok_or(ModelResolveError::NoCacheDir)
}

/// Streams the body through a counting writer so multi-hundred-MB models
/// never sit in memory whole.
fn download(url: &str, dest: &Path, progress: Option<ProgressFn>) -> Result<(), ModelResolveError> {
    let mut response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| ModelResolveError::Download {
            url: url.to_string(),
            source: e,
        })?;

    let total = response.content_length().unwrap_or(0);

    // Write to a temp file first, then rename for atomicity
    let temp_path = dest.with_extension("part");
    let file = fs::File::create(&temp_path).map_err(|e| ModelResolveError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    let mut writer = ProgressWriter {
        inner: file,
        total,
        downloaded: 0,
        last_reported: 0,
        progress,
    };

    if let Err(e) = response.copy_to(&mut writer) {
        let _ = fs::remove_file(&temp_path);
        return Err(ModelResolveError::Download {
            url: url.to_string(),
            source: e,
        });
    }

    writer.finish().map_err(|e| ModelResolveError::Write {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, dest).map_err(|e| ModelResolveError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

struct ProgressWriter {
    inner: fs::File,
    total: u64,
    downloaded: u64,
    last_reported: u64,
    progress: Option<ProgressFn>,
}

impl ProgressWriter {
    fn finish(mut self) -> std::io::Result<()> {
        self.inner.flush()?;
        if let Some(ref cb) = self.progress {
            cb(self.downloaded, self.total);
        }
        Ok(())
    }
}

impl Write for ProgressWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.downloaded += written as u64;
        if self.downloaded - self.last_reported >= PROGRESS_STEP {
            self.last_reported = self.downloaded;
            if let Some(ref cb) = self.progress {
                cb(self.downloaded, self.total);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
