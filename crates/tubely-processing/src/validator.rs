use tubely_core::constants::{
    ACCEPTED_VIDEO_CONTENT_TYPE, MAX_THUMBNAIL_SIZE_BYTES, MAX_VIDEO_SIZE_BYTES,
};
use tubely_core::AppError;

/// Rejections for an uploaded file. All of them are the client's fault.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing Content-Type for {kind}")]
    MissingContentType { kind: &'static str },

    #[error("{kind} file exceeds the maximum allowed size of {}MB", .max >> 20)]
    FileTooLarge {
        kind: &'static str,
        size: usize,
        max: usize,
    },

    #[error("Wrong {kind} type")]
    InvalidContentType {
        kind: &'static str,
        content_type: String,
    },
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Size and content-type checks for one kind of upload.
#[derive(Debug, Clone)]
pub struct UploadValidator {
    kind: &'static str,
    max_file_size: usize,
    /// `None` accepts any declared content type.
    accepted_content_type: Option<&'static str>,
}

impl UploadValidator {
    pub fn new(
        kind: &'static str,
        max_file_size: usize,
        accepted_content_type: Option<&'static str>,
    ) -> Self {
        Self {
            kind,
            max_file_size,
            accepted_content_type,
        }
    }

    /// Any image type, up to 10 MiB.
    pub fn thumbnail() -> Self {
        Self::new("thumbnail", MAX_THUMBNAIL_SIZE_BYTES, None)
    }

    /// `video/mp4` only, up to 1 GiB.
    pub fn video() -> Self {
        Self::new(
            "video",
            MAX_VIDEO_SIZE_BYTES,
            Some(ACCEPTED_VIDEO_CONTENT_TYPE),
        )
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// The ceiling is inclusive: exactly `max_file_size` bytes passes.
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                kind: self.kind,
                size,
                max: self.max_file_size,
            });
        }
        Ok(())
    }

    /// Returns the declared content type once it is present and accepted.
    ///
    /// Matching is exact. `video/MP4` is not `video/mp4`.
    pub fn validate_content_type<'a>(
        &self,
        content_type: Option<&'a str>,
    ) -> Result<&'a str, ValidationError> {
        let content_type = content_type
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .ok_or(ValidationError::MissingContentType { kind: self.kind })?;

        if let Some(accepted) = self.accepted_content_type {
            if content_type != accepted {
                return Err(ValidationError::InvalidContentType {
                    kind: self.kind,
                    content_type: content_type.to_string(),
                });
            }
        }

        Ok(content_type)
    }
}
