//! Application state shared by all handlers.

use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoRepository;
use tubely_processing::VideoProcessor;
use tubely_storage::{LocalStorage, Storage};

pub struct AppState {
    pub config: Config,
    pub videos: Arc<dyn VideoRepository>,
    /// Assets root served under `/assets`.
    pub assets: LocalStorage,
    /// Remote object store videos are promoted to.
    pub remote: Arc<dyn Storage>,
    pub video_processor: VideoProcessor,
}

impl AppState {
    pub fn new(
        config: Config,
        videos: Arc<dyn VideoRepository>,
        assets: LocalStorage,
        remote: Arc<dyn Storage>,
    ) -> Self {
        let video_processor = VideoProcessor::new(config.ffprobe_path.clone());
        Self {
            config,
            videos,
            assets,
            remote,
            video_processor,
        }
    }
}
