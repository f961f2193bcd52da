//! Test helpers: build AppState and router for integration tests.
//!
//! Everything runs in-process: the record store and the object store are in
//! memory, the assets root is a temp dir and ffprobe is a shell stub that prints
//! fixed dimensions. Run with `cargo test -p tubely-api`.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;

use axum_test::TestServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tubely_api::{setup_routes, AppState};
use tubely_core::{Config, StorageBackend, VideoRecord};
use tubely_db::test_helpers::InMemoryVideoRepository;
use tubely_storage::{LocalStorage, ObjectStorage};
use uuid::Uuid;

pub const TEST_BUCKET: &str = "tubely-test";
pub const TEST_PORT: u16 = 8091;

/// Test application: server plus handles on everything it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub videos: InMemoryVideoRepository,
    pub remote: ObjectStorage,
    pub assets_root: PathBuf,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    /// Insert a fresh record owned by `user_id`.
    pub fn create_video(&self, user_id: Uuid) -> VideoRecord {
        let video = VideoRecord::new(user_id, "Boots", "A video about boots");
        self.videos.insert(video.clone());
        video
    }

    /// Files currently in the assets root.
    pub fn asset_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.assets_root)
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .filter(|path| path.is_file())
            .collect()
    }
}

pub fn test_config(assets_root: PathBuf, ffprobe_path: String) -> Config {
    Config {
        environment: "development".to_string(),
        server_port: TEST_PORT,
        jwt_secret: auth::TEST_JWT_SECRET.to_string(),
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 1,
        assets_root,
        asset_host: "localhost".to_string(),
        storage_backend: StorageBackend::Memory,
        s3_bucket: TEST_BUCKET.to_string(),
        s3_region: None,
        s3_endpoint: None,
        s3_public_host: "s3.amazonaws.com".to_string(),
        ffprobe_path,
    }
}

/// Setup test app whose ffprobe reports a 1920x1080 stream.
pub async fn setup_test_app() -> TestApp {
    setup_test_app_with_probe(&probe_script(1920, 1080)).await
}

/// Setup test app whose ffprobe runs `script` (a shell body).
pub async fn setup_test_app_with_probe(script: &str) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let assets_root = temp_dir.path().join("assets");
    let ffprobe_path = write_stub_ffprobe(temp_dir.path(), script);

    let config = test_config(assets_root.clone(), ffprobe_path);

    let assets = LocalStorage::new(assets_root.clone(), "localhost", TEST_PORT)
        .await
        .expect("Failed to create assets root");
    let videos = InMemoryVideoRepository::new();
    let remote = ObjectStorage::in_memory(TEST_BUCKET, "s3.amazonaws.com");

    let state = Arc::new(AppState::new(
        config,
        Arc::new(videos.clone()),
        assets,
        Arc::new(remote.clone()),
    ));

    let app = setup_routes(state);
    let server = TestServer::new(app.into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        videos,
        remote,
        assets_root,
        _temp_dir: temp_dir,
    }
}

/// Shell body printing ffprobe-style JSON for one stream.
pub fn probe_script(width: u32, height: u32) -> String {
    format!(
        r#"echo '{{"programs": [], "streams": [{{"width": {}, "height": {}}}]}}'"#,
        width, height
    )
}

#[cfg(unix)]
fn write_stub_ffprobe(dir: &Path, script: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("ffprobe");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", script)).expect("Failed to write stub");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to chmod stub");
    path.to_string_lossy().into_owned()
}

#[cfg(not(unix))]
fn write_stub_ffprobe(_dir: &Path, _script: &str) -> String {
    "ffprobe".to_string()
}
