//! Database repositories for data access layer

mod video;

pub use video::{PgVideoRepository, VideoRepository};
