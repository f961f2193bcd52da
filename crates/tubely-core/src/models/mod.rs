//! Data models for the application

mod aspect_ratio;
mod video;

pub use aspect_ratio::*;
pub use video::*;
