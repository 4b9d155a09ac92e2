//! Video Service
//!
//! Small HTTP service for managing video records and their thumbnail
//! uploads. Thumbnails are validated, stored on local disk under the assets
//! root, and served back as static files.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

// Public re-exports
pub use config::Config;
pub use error::{AppError, Result};

/// Embedded sqlx migrations, run at startup and by tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
