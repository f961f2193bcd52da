pub mod health;
pub mod thumbnail_upload;
pub mod video_upload;

use tubely_core::{AppError, VideoRecord};
use uuid::Uuid;

use crate::state::AppState;

pub(crate) fn parse_video_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest("Invalid video ID".to_string()))
}

/// Load the record and make sure `user_id` owns it. Nothing is mutated before this passes.
pub(crate) async fn load_owned_video(
    state: &AppState,
    video_id: Uuid,
    user_id: Uuid,
) -> Result<VideoRecord, AppError> {
    let video = state
        .videos
        .get_video(video_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Couldn't find video".to_string()))?;

    if !video.is_owned_by(user_id) {
        return Err(AppError::Forbidden("Not authorized".to_string()));
    }

    Ok(video)
}
