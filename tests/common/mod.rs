#![allow(dead_code)]
//! Shared helpers for the API tests
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use video_service::config::{AppConfig, AssetsConfig, AuthConfig, Config, DatabaseConfig};
use video_service::MIGRATOR;

pub const JWT_SECRET: &str = "integration-test-secret";
pub const TEST_PORT: u16 = 8091;

/// Fresh in-memory database with the schema applied. A single connection
/// keeps every query on the same in-memory instance.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");
    MIGRATOR.run(&pool).await.expect("migrations apply");
    pool
}

pub fn test_config(assets_root: &Path) -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: TEST_PORT,
            env: "test".to_string(),
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        auth: AuthConfig {
            jwt_secret: JWT_SECRET.to_string(),
            token_ttl_secs: 3600,
        },
        assets: AssetsConfig {
            root: assets_root.to_string_lossy().into_owned(),
        },
    }
}

pub const BOUNDARY: &str = "----test-boundary-7MA4YWxkTrZu0gW";

/// Build a single-field multipart/form-data body. `filename: None` produces
/// a plain (non-file) field.
pub fn multipart_body(
    field_name: &str,
    filename: Option<&str>,
    content_type: &str,
    data: &[u8],
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    match filename {
        Some(name) => body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field_name, name
            )
            .as_bytes(),
        ),
        None => body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n", field_name).as_bytes(),
        ),
    }
    body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", BOUNDARY),
        body,
    )
}
