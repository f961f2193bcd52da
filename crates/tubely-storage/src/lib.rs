//! Tubely Storage Library
//!
//! Storage for uploaded assets. Two places hold files:
//!
//! - **Assets root**: a local directory served under `/assets/`. Thumbnails live
//!   here permanently; videos pass through it before promotion.
//! - **Remote object store**: videos end up here under
//!   `<classification>/<hex>.<ext>` keys, behind the `Storage` trait.
//!
//! Naming and URL construction are pure functions in the `assets` module.

pub mod assets;
pub mod factory;
pub mod local;
pub mod object;
pub mod traits;

// Re-export commonly used types
pub use factory::create_remote_storage;
pub use local::LocalStorage;
pub use object::ObjectStorage;
pub use traits::{Storage, StorageError, StorageResult};
pub use tubely_core::StorageBackend;
