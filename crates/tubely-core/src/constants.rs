//! Upload limits and accepted formats.

/// Hard ceiling for thumbnail uploads (10 MiB).
pub const MAX_THUMBNAIL_SIZE_BYTES: usize = 10 << 20;

/// Hard ceiling for video uploads (1 GiB).
pub const MAX_VIDEO_SIZE_BYTES: usize = 1 << 30;

/// Headroom on top of a file ceiling for multipart boundaries and part headers.
pub const MULTIPART_OVERHEAD_BYTES: usize = 1 << 20;

/// The only content type accepted for video uploads. Matched exactly.
pub const ACCEPTED_VIDEO_CONTENT_TYPE: &str = "video/mp4";

/// Multipart field carrying a thumbnail image.
pub const THUMBNAIL_FIELD: &str = "thumbnail";

/// Multipart field carrying a video file.
pub const VIDEO_FIELD: &str = "video";

/// Issuer stamped into and required on access tokens.
pub const TOKEN_ISSUER: &str = "tubely-access";
