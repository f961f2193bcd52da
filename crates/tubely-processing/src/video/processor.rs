//! Aspect ratio classification through ffprobe.

use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;
use tracing::{debug, error};
use tubely_core::{AppError, AspectRatio};

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to run ffprobe: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("ffprobe exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Failed to parse ffprobe output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("ffprobe reported no video stream")]
    NoVideoStream,
}

impl From<ProbeError> for AppError {
    fn from(err: ProbeError) -> Self {
        AppError::MediaProbe(err.to_string())
    }
}

/// The slice of ffprobe's JSON output we ask for.
#[derive(Debug, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

#[derive(Debug, Deserialize)]
pub struct ProbeStream {
    pub width: u32,
    pub height: u32,
}

impl ProbeOutput {
    pub fn parse(stdout: &[u8]) -> Result<Self, ProbeError> {
        Ok(serde_json::from_slice(stdout)?)
    }

    /// Dimensions of the first video stream.
    pub fn dimensions(&self) -> Result<(u32, u32), ProbeError> {
        self.streams
            .first()
            .map(|s| (s.width, s.height))
            .ok_or(ProbeError::NoVideoStream)
    }
}

pub struct VideoProcessor {
    ffprobe_path: String,
}

impl VideoProcessor {
    pub fn new(ffprobe_path: impl Into<String>) -> Self {
        Self {
            ffprobe_path: ffprobe_path.into(),
        }
    }

    /// Probe `path` and bucket its first video stream.
    ///
    /// A non-zero ffprobe exit fails the classification. stdout and stderr are
    /// drained together by `output()`, so a chatty stderr cannot block the child.
    #[tracing::instrument(skip(self), fields(service = "video"))]
    pub async fn classify(&self, path: &Path) -> Result<AspectRatio, ProbeError> {
        let output = Command::new(&self.ffprobe_path)
            .args([
                "-v",
                "error",
                "-select_streams",
                "v:0",
                "-show_entries",
                "stream=width,height",
                "-of",
                "json",
            ])
            .arg(path)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(ProbeError::Spawn)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(status = %output.status, stderr = %stderr, "ffprobe failed");
            return Err(ProbeError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let (width, height) = ProbeOutput::parse(&output.stdout)?.dimensions()?;
        let aspect_ratio = AspectRatio::from_dimensions(width, height);

        debug!(width, height, aspect_ratio = %aspect_ratio, "Video classified");
        Ok(aspect_ratio)
    }
}
