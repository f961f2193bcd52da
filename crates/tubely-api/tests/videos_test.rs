//! Video upload integration tests.
//!
//! ffprobe is replaced by a shell stub, so these only run on unix.
//! Run with: `cargo test -p tubely-api --test videos_test`

#![cfg(unix)]

mod helpers;

use helpers::auth::{bearer_for, expired_bearer_for};
use helpers::fixtures::{create_fake_mp4, raw_multipart_body, raw_multipart_content_type, video_form};
use helpers::{probe_script, setup_test_app, setup_test_app_with_probe, TestApp, TEST_BUCKET};
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, ObjectStoreExt};
use tubely_storage::Storage;
use uuid::Uuid;

fn video_path(video_id: Uuid) -> String {
    format!("/videos/{}/video", video_id)
}

fn remote_prefix() -> String {
    format!("http://{}.s3.amazonaws.com/", TEST_BUCKET)
}

/// Upload `data` as the owner and return the stored `video_url`.
async fn upload_as_owner(app: &TestApp, video_id: Uuid, user_id: Uuid, data: Vec<u8>) -> String {
    let response = app
        .client()
        .post(&video_path(video_id))
        .add_header("Authorization", bearer_for(user_id))
        .multipart(video_form(data, "video/mp4"))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<serde_json::Value>(), serde_json::json!({}));

    app.videos
        .get(video_id)
        .unwrap()
        .video_url
        .expect("video_url should be set")
}

#[tokio::test]
async fn test_upload_landscape_video() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);
    let data = create_fake_mp4(4096);

    let url = upload_as_owner(&app, video.id, user_id, data.clone()).await;

    let key = url.strip_prefix(&remote_prefix()).expect("remote object URL");
    let filename = key.strip_prefix("landscape/").expect("landscape prefix");
    assert_eq!(filename.len(), "0".repeat(64).len() + ".mp4".len());
    assert!(filename.ends_with(".mp4"));
    assert!(filename
        .trim_end_matches(".mp4")
        .chars()
        .all(|c| c.is_ascii_hexdigit()));

    // The object landed with the upload's bytes and content type.
    assert!(app.remote.exists(key).await.unwrap());
    let object = app
        .remote
        .store()
        .get(&ObjectPath::from(key))
        .await
        .unwrap();
    let content_type = object
        .attributes
        .get(&Attribute::ContentType)
        .map(|v| AsRef::<str>::as_ref(v).to_string());
    assert_eq!(content_type.as_deref(), Some("video/mp4"));
    assert_eq!(object.bytes().await.unwrap().as_ref(), data.as_slice());

    // The local copy survives, emptied.
    let local = app.assets_root.join(filename);
    assert_eq!(std::fs::metadata(&local).unwrap().len(), 0);

    let stored = app.videos.get(video.id).unwrap();
    assert!(stored.thumbnail_url.is_none());
    assert_eq!(stored.title, video.title);
}

#[tokio::test]
async fn test_upload_portrait_video() {
    let app = setup_test_app_with_probe(&probe_script(1080, 1920)).await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let url = upload_as_owner(&app, video.id, user_id, create_fake_mp4(1024)).await;

    assert!(url.starts_with(&format!("{}portrait/", remote_prefix())));
}

#[tokio::test]
async fn test_upload_square_video_is_other() {
    let app = setup_test_app_with_probe(&probe_script(1000, 1000)).await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let url = upload_as_owner(&app, video.id, user_id, create_fake_mp4(1024)).await;

    assert!(url.starts_with(&format!("{}other/", remote_prefix())));
}

#[tokio::test]
async fn test_video_content_type_is_matched_exactly() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", bearer_for(user_id))
        .content_type(&raw_multipart_content_type())
        .bytes(raw_multipart_body(
            "video",
            "boots.mp4",
            Some("video/MP4"),
            &create_fake_mp4(1024),
        ))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Wrong video type"
    );

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", bearer_for(user_id))
        .multipart(video_form(create_fake_mp4(1024), "video/webm"))
        .await;
    assert_eq!(response.status_code(), 400);

    assert_eq!(app.videos.get(video.id).unwrap(), video);
    assert!(app.asset_files().is_empty());
}

#[tokio::test]
async fn test_video_field_missing() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", bearer_for(user_id))
        .multipart(helpers::fixtures::file_form(
            "file",
            create_fake_mp4(1024),
            "boots.mp4",
            "video/mp4",
        ))
        .await;

    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Video file missing"
    );
}

#[tokio::test]
async fn test_video_for_someone_elses_video_is_forbidden() {
    let app = setup_test_app().await;
    let owner = Uuid::new_v4();
    let video = app.create_video(owner);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", bearer_for(Uuid::new_v4()))
        .multipart(video_form(create_fake_mp4(1024), "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 403);
    assert_eq!(app.videos.get(video.id).unwrap(), video);
    assert!(app.asset_files().is_empty());
}

#[tokio::test]
async fn test_video_unknown_record() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .post(&video_path(Uuid::new_v4()))
        .add_header("Authorization", bearer_for(Uuid::new_v4()))
        .multipart(video_form(create_fake_mp4(1024), "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "Couldn't find video"
    );
}

#[tokio::test]
async fn test_video_requires_valid_token() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", expired_bearer_for(user_id))
        .multipart(video_form(create_fake_mp4(1024), "video/mp4"))
        .await;
    assert_eq!(response.status_code(), 401);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", "Bearer not-a-jwt")
        .multipart(video_form(create_fake_mp4(1024), "video/mp4"))
        .await;
    assert_eq!(response.status_code(), 401);

    assert_eq!(app.videos.get(video.id).unwrap(), video);
}

#[tokio::test]
async fn test_failed_probe_leaves_no_trace() {
    let app = setup_test_app_with_probe("echo 'moov atom not found' >&2\nexit 1").await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", bearer_for(user_id))
        .multipart(video_form(create_fake_mp4(1024), "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 500);
    let body: serde_json::Value = response.json();
    assert!(!body["error"].as_str().unwrap().contains("moov"));

    let stored = app.videos.get(video.id).unwrap();
    assert!(stored.video_url.is_none());
    assert!(app.asset_files().is_empty());
}

#[tokio::test]
async fn test_probe_without_video_stream_fails() {
    let app = setup_test_app_with_probe(r#"echo '{"streams": []}'"#).await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let response = app
        .client()
        .post(&video_path(video.id))
        .add_header("Authorization", bearer_for(user_id))
        .multipart(video_form(create_fake_mp4(1024), "video/mp4"))
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(app.videos.get(video.id).unwrap().video_url.is_none());
    assert!(app.asset_files().is_empty());
}

#[tokio::test]
async fn test_video_reupload_changes_url() {
    let app = setup_test_app().await;
    let user_id = Uuid::new_v4();
    let video = app.create_video(user_id);

    let first = upload_as_owner(&app, video.id, user_id, create_fake_mp4(512)).await;
    let second = upload_as_owner(&app, video.id, user_id, create_fake_mp4(512)).await;

    assert_ne!(first, second);
    // Both emptied local copies remain.
    assert_eq!(app.asset_files().len(), 2);
}
