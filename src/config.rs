use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use serde::Deserialize;

use crate::media_kind::MediaKind;

const DEFAULT_CAPTURE_INTERVAL_MS: u64 = 5000;
const DEFAULT_KEYWORD: &str = "capture";

#[derive(Clone, Debug, Deserialize)]
pub struct CaptureConfig {
    /// Where the capture loop writes its files.
    pub media_dir: PathBuf,
    pub kind: MediaKind,
    #[serde(default = "default_capture_interval_ms")]
    pub capture_interval_ms: u64,
    /// Overrides the per-kind queue capacity.
    #[serde(default)]
    pub max_files: Option<usize>,
    #[serde(default = "default_keyword")]
    pub keyword: String,
}

fn default_capture_interval_ms() -> u64 {
    DEFAULT_CAPTURE_INTERVAL_MS
}

fn default_keyword() -> String {
    DEFAULT_KEYWORD.to_string()
}

impl CaptureConfig {
    pub fn new(media_dir: impl Into<PathBuf>, kind: MediaKind) -> Self {
        CaptureConfig {
            media_dir: media_dir.into(),
            kind,
            capture_interval_ms: DEFAULT_CAPTURE_INTERVAL_MS,
            max_files: None,
            keyword: DEFAULT_KEYWORD.to_string(),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let config = serde_json::from_reader(BufReader::new(File::open(path)?))?;
        Ok(config)
    }

    pub fn capture_interval(&self) -> Duration {
        Duration::from_millis(self.capture_interval_ms)
    }

    pub fn max_files(&self) -> usize {
        self.max_files.unwrap_or(self.kind.max_files())
    }
}
