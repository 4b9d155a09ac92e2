/// Database access layer
///
/// Plain async functions over a `SqlitePool`, one module per aggregate.
pub mod user_repo;
pub mod video_repo;
