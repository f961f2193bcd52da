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
use tubely_core::constants::THUMBNAIL_FIELD;
use tubely_core::AppError;
use tubely_processing::UploadValidator;
use tubely_storage::assets;

/// `POST /videos/{video_id}/thumbnail`
///
/// Stores the image under the assets root and points the record's thumbnail URL
/// at it. Ownership is settled before anything is written.
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Value>), HttpAppError> {
    let video_id = parse_video_id(&video_id)?;
    let user_id = authenticate(&headers, &state.config.jwt_secret)?;
    tracing::info!(video_id = %video_id, user_id = %user_id, "Uploading thumbnail");

    let mut multipart = require_multipart(multipart)?;
    let file = extract_multipart_file(&mut multipart, THUMBNAIL_FIELD)
        .await?
        .ok_or_else(|| AppError::BadRequest("Thumbnail file missing".to_string()))?;

    let validator = UploadValidator::thumbnail();
    let content_type = validator.validate_content_type(file.content_type.as_deref())?;
    validator.validate_file_size(file.size())?;

    let mut video = load_owned_video(&state, video_id, user_id).await?;

    let filename = assets::thumbnail_filename(content_type);
    state.assets.write(&filename, &file.data).await?;

    video.thumbnail_url = Some(state.assets.url(&filename));
    if let Err(e) = state.videos.update_video(&video).await {
        state.assets.remove(&filename).await;
        return Err(e.into());
    }

    tracing::info!(
        video_id = %video_id,
        size_bytes = file.size(),
        file_name = ?file.file_name,
        thumbnail_url = ?video.thumbnail_url,
        "Thumbnail uploaded"
    );

    Ok((StatusCode::OK, Json(json!({}))))
}
