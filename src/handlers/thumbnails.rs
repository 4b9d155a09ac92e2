/// Thumbnail upload handler
///
/// Accepts a multipart form with a `thumbnail` file field, validates it, and
/// stores the bytes under the assets root as `<video_id>.<ext>`. The public
/// URL of the file is persisted on the video record.
use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use futures_util::StreamExt;
use mime::Mime;
use sqlx::SqlitePool;
use std::path::Path;
use uuid::Uuid;

use crate::auth;
use crate::config::Config;
use crate::db::video_repo;
use crate::error::{AppError, Result};

/// Maximum accepted thumbnail size: 10 MiB
pub const MAX_UPLOAD_SIZE: usize = 10 << 20;

/// Public URL a stored asset resolves at, mirroring the static mount.
pub fn asset_url(port: u16, assets_root: &str, file_name: &str) -> String {
    format!(
        "http://localhost:{}/{}/{}",
        port,
        assets_root.trim_matches('/'),
        file_name
    )
}

/// POST /api/videos/{video_id}/thumbnail
pub async fn upload_thumbnail(
    http_req: HttpRequest,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    video_id: web::Path<String>,
    mut payload: Multipart,
) -> Result<HttpResponse> {
    let video_uuid = Uuid::parse_str(&video_id)
        .map_err(|_| AppError::BadRequest("Invalid video ID".to_string()))?;
    let user_id = auth::require_user(http_req.headers(), &config.auth)?;

    tracing::info!(video_id = %video_uuid, %user_id, "uploading thumbnail");

    // Locate the "thumbnail" field, draining anything else.
    let mut thumbnail: Option<(Vec<u8>, Mime)> = None;
    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?;

        if field.name() != "thumbnail" {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| AppError::BadRequest(format!("Multipart error: {}", e)))?;
            }
            continue;
        }

        if field.content_disposition().get_filename().is_none() {
            return Err(AppError::BadRequest(
                "Thumbnail must be a file".to_string(),
            ));
        }
        let media_type = field.content_type().clone();

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let bytes =
                chunk.map_err(|e| AppError::BadRequest(format!("Upload read error: {}", e)))?;
            if data.len() + bytes.len() > MAX_UPLOAD_SIZE {
                return Err(AppError::BadRequest(
                    "Thumbnail file is too large".to_string(),
                ));
            }
            data.extend_from_slice(&bytes);
        }

        thumbnail = Some((data, media_type));
        break;
    }

    let (data, media_type) = thumbnail
        .ok_or_else(|| AppError::BadRequest("Thumbnail must be a file".to_string()))?;

    // Exact match only; parameters like charset must not widen the gate.
    match media_type.essence_str() {
        "image/jpeg" | "image/png" => {}
        _ => {
            return Err(AppError::BadRequest(
                "Thumbnail must be a JPEG or PNG image".to_string(),
            ))
        }
    }

    let video = video_repo::get_video(pool.get_ref(), video_uuid)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.user_id != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to upload thumbnail for this video".to_string(),
        ));
    }

    let file_name = format!("{}.{}", video_uuid, media_type.subtype().as_str());
    let path = Path::new(&config.assets.root).join(&file_name);

    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write thumbnail: {}", e)))?;

    let thumbnail_url = asset_url(config.app.port, &config.assets.root, &file_name);
    let video = video_repo::set_thumbnail_url(pool.get_ref(), video_uuid, &thumbnail_url)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    tracing::info!(video_id = %video_uuid, url = %thumbnail_url, "thumbnail stored");

    Ok(HttpResponse::Ok().json(video))
}
