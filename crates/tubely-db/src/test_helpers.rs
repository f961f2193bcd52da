//! In-memory repositories for testing without a database

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tubely_core::{AppError, VideoRecord};
use uuid::Uuid;

use crate::VideoRepository;

#[derive(Clone, Default)]
pub struct InMemoryVideoRepository {
    videos: Arc<Mutex<HashMap<Uuid, VideoRecord>>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn videos(&self) -> MutexGuard<'_, HashMap<Uuid, VideoRecord>> {
        self.videos.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn insert(&self, video: VideoRecord) {
        self.videos().insert(video.id, video);
    }

    /// Snapshot of a stored record, for assertions.
    pub fn get(&self, id: Uuid) -> Option<VideoRecord> {
        self.videos().get(&id).cloned()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn get_video(&self, id: Uuid) -> Result<Option<VideoRecord>, AppError> {
        Ok(self.get(id))
    }

    async fn update_video(&self, video: &VideoRecord) -> Result<(), AppError> {
        let mut videos = self.videos();
        let stored = videos
            .get_mut(&video.id)
            .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video.id)))?;
        stored.thumbnail_url = video.thumbnail_url.clone();
        stored.video_url = video.video_url.clone();
        stored.updated_at = Utc::now();
        Ok(())
    }
}
