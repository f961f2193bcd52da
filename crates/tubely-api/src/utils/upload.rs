//! Common utilities for file upload handlers

use axum::extract::multipart::{Multipart, MultipartRejection};
use axum::http::header::CONTENT_TYPE;
use bytes::Bytes;
use tubely_core::AppError;

/// A file part pulled out of a multipart body. Lives for one request.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Bytes,
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl UploadedFile {
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// Turn a body that is not multipart at all into a 400.
pub fn require_multipart(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Multipart, AppError> {
    multipart.map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e.body_text())))
}

/// Read the body until the file part named `field` shows up.
///
/// Parts with that name but no filename are plain form values, not files, and
/// are skipped. Returns `None` when no file part with that name exists. A body
/// over the route's size limit fails here as a bad request.
pub async fn extract_multipart_file(
    multipart: &mut Multipart,
    field: &str,
) -> Result<Option<UploadedFile>, AppError> {
    while let Some(part) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read multipart: {}", e)))?
    {
        if part.name() != Some(field) || part.file_name().is_none() {
            continue;
        }

        let file_name = part.file_name().map(String::from);
        // Raw header value; the parsed mime would already be lowercased.
        let content_type = part
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let data = part
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file data: {}", e)))?;

        return Ok(Some(UploadedFile {
            data,
            content_type,
            file_name,
        }));
    }

    Ok(None)
}
