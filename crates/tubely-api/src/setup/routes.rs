//! Route configuration and setup

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tubely_core::constants::{
    MAX_THUMBNAIL_SIZE_BYTES, MAX_VIDEO_SIZE_BYTES, MULTIPART_OVERHEAD_BYTES,
};

/// Setup all application routes
pub fn setup_routes(state: Arc<AppState>) -> Router {
    let assets = ServeDir::new(state.assets.root());

    Router::new()
        .route("/healthz", get(handlers::health::health_check))
        .route(
            "/videos/{video_id}/thumbnail",
            post(handlers::thumbnail_upload::upload_thumbnail).layer(DefaultBodyLimit::max(
                MAX_THUMBNAIL_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        .route(
            "/videos/{video_id}/video",
            post(handlers::video_upload::upload_video).layer(DefaultBodyLimit::max(
                MAX_VIDEO_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        .nest_service("/assets", assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
