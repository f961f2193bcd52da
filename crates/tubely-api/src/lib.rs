//! Tubely API Library
//!
//! HTTP handlers for thumbnail and video uploads, plus application setup.

pub mod auth;
pub mod error;
mod handlers;
pub mod setup;
pub mod state;
mod telemetry;
mod utils;

pub use error::{ErrorResponse, HttpAppError};
pub use setup::routes::setup_routes;
pub use state::AppState;
