//! Test fixtures: image and video blobs.

use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;

pub const RAW_BOUNDARY: &str = "tubely-test-boundary";

/// Minimal valid 1x1 PNG bytes.
pub fn create_minimal_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
        0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00,
        0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ]
}

/// An `ftyp` box followed by zero padding. Not playable; ffprobe is stubbed.
pub fn create_fake_mp4(len: usize) -> Vec<u8> {
    let mut data = vec![
        0x00, 0x00, 0x00, 0x18, b'f', b't', b'y', b'p', b'i', b's', b'o', b'm', 0x00, 0x00, 0x02,
        0x00, b'i', b's', b'o', b'm', b'm', b'p', b'4', b'1',
    ];
    data.resize(len.max(data.len()), 0);
    data
}

/// Single-file form under `field`.
pub fn file_form(field: &str, data: Vec<u8>, file_name: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        field.to_string(),
        Part::bytes(Bytes::from(data))
            .file_name(file_name)
            .mime_type(mime_type),
    )
}

pub fn thumbnail_form(data: Vec<u8>, mime_type: &str) -> MultipartForm {
    file_form("thumbnail", data, "thumbnail.png", mime_type)
}

pub fn video_form(data: Vec<u8>, mime_type: &str) -> MultipartForm {
    file_form("video", data, "boots.mp4", mime_type)
}

/// Hand-built multipart body, for part headers the form builder would normalise
/// (mixed-case types) or always add (a missing Content-Type).
pub fn raw_multipart_body(
    field: &str,
    file_name: &str,
    content_type: Option<&str>,
    data: &[u8],
) -> Bytes {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", RAW_BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    if let Some(content_type) = content_type {
        body.extend_from_slice(format!("Content-Type: {}\r\n", content_type).as_bytes());
    }
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", RAW_BOUNDARY).as_bytes());
    Bytes::from(body)
}

pub fn raw_multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", RAW_BOUNDARY)
}
