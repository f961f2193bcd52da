//! Tubely Processing Library
//!
//! Checks applied to uploaded files before they are stored, and the ffprobe-based
//! aspect ratio classification of stored videos.

pub mod validator;
pub mod video;

pub use validator::{UploadValidator, ValidationError};
pub use video::{ProbeError, VideoProcessor};
