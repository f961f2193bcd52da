//! Tubely database layer
//!
//! Repositories over Postgres, plus in-memory doubles behind the `test-helpers`
//! feature.

pub mod db;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use db::{PgVideoRepository, VideoRepository};
