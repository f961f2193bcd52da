//! Tubely Core Library
//!
//! This crate provides core domain models, error types, configuration, and upload
//! constants shared across all Tubely components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{AspectRatio, VideoRecord};
pub use storage_types::StorageBackend;
