use crate::auth::authenticate;
use crate::error::HttpAppError;
use crate::handlers::{load_owned_video, parse_video_id};
use crate::state::AppState;
use crate::utils::upload::{extract_multipart_file, require_multipart};
use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tubely_core::constants::VIDEO_FIELD;
use tubely_core::{AppError, VideoRecord};
use tubely_processing::UploadValidator;
use tubely_storage::assets;

/// `POST /videos/{video_id}/video`
///
/// Writes the upload to the assets root, classifies it with ffprobe, promotes it
/// to the remote store under `<classification>/<hex>.mp4`, records the public URL
/// and finally truncates the local copy.
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Value>), HttpAppError> {
    let video_id = parse_video_id(&video_id)?;
    let user_id = authenticate(&headers, &state.config.jwt_secret)?;

    let video = load_owned_video(&state, video_id, user_id).await?;

    let mut multipart = require_multipart(multipart)?;
    let file = extract_multipart_file(&mut multipart, VIDEO_FIELD)
        .await?
        .ok_or_else(|| AppError::BadRequest("Video file missing".to_string()))?;

    let validator = UploadValidator::video();
    validator.validate_file_size(file.size())?;
    let content_type = validator
        .validate_content_type(file.content_type.as_deref())?
        .to_string();

    tracing::info!(
        video_id = %video_id,
        user_id = %user_id,
        size_bytes = file.size(),
        file_name = ?file.file_name,
        "Uploading video"
    );

    let filename = assets::video_filename(&content_type);
    let disk_path = state.assets.write(&filename, &file.data).await?;
    drop(file);

    // The local copy is removed on failure so no orphan is left behind.
    let video_url = match promote(&state, video, &disk_path, &filename, &content_type).await {
        Ok(url) => url,
        Err(e) => {
            state.assets.remove(&filename).await;
            return Err(e);
        }
    };

    if let Err(e) = state.assets.truncate(&filename).await {
        tracing::warn!(error = %e, filename = %filename, "Failed to truncate promoted video");
    }

    tracing::info!(video_id = %video_id, video_url = %video_url, "Video uploaded");

    Ok((StatusCode::OK, Json(json!({}))))
}

/// Classify, upload, and persist the public URL.
async fn promote(
    state: &AppState,
    mut video: VideoRecord,
    disk_path: &std::path::Path,
    filename: &str,
    content_type: &str,
) -> Result<String, HttpAppError> {
    let aspect_ratio = state.video_processor.classify(disk_path).await?;
    let key = assets::video_object_key(aspect_ratio.as_str(), filename);

    state
        .remote
        .upload_file(disk_path, &key, content_type)
        .await?;

    let url = state.remote.public_url(&key);
    video.video_url = Some(url.clone());
    state.videos.update_video(&video).await?;

    Ok(url)
}
