/// Video handlers - CRUD over the caller's video records
use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::SqlitePool;
use std::path::Path;
use uuid::Uuid;

use crate::auth;
use crate::config::Config;
use crate::db::video_repo;
use crate::error::{AppError, Result};
use crate::models::CreateVideoRequest;

/// Create a draft video record
pub async fn create_video(
    http_req: HttpRequest,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    req: web::Json<CreateVideoRequest>,
) -> Result<HttpResponse> {
    let user_id = auth::require_user(http_req.headers(), &config.auth)?;

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title is required".to_string()));
    }

    let video = video_repo::create_video(
        pool.get_ref(),
        user_id,
        req.title.trim(),
        req.description.as_deref(),
    )
    .await?;

    Ok(HttpResponse::Created().json(video))
}

/// List the caller's videos, newest first
pub async fn list_videos(
    http_req: HttpRequest,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
) -> Result<HttpResponse> {
    let user_id = auth::require_user(http_req.headers(), &config.auth)?;
    let videos = video_repo::list_videos_by_user(pool.get_ref(), user_id).await?;
    Ok(HttpResponse::Ok().json(videos))
}

/// Get a specific video
pub async fn get_video(
    http_req: HttpRequest,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    video_id: web::Path<String>,
) -> Result<HttpResponse> {
    let video_uuid = Uuid::parse_str(&video_id)
        .map_err(|_| AppError::BadRequest("Invalid video ID".to_string()))?;
    let user_id = auth::require_user(http_req.headers(), &config.auth)?;

    let video = video_repo::get_video(pool.get_ref(), video_uuid)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.user_id != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to view this video".to_string(),
        ));
    }

    Ok(HttpResponse::Ok().json(video))
}

/// Delete a video and any stored thumbnail file
pub async fn delete_video(
    http_req: HttpRequest,
    pool: web::Data<SqlitePool>,
    config: web::Data<Config>,
    video_id: web::Path<String>,
) -> Result<HttpResponse> {
    let video_uuid = Uuid::parse_str(&video_id)
        .map_err(|_| AppError::BadRequest("Invalid video ID".to_string()))?;
    let user_id = auth::require_user(http_req.headers(), &config.auth)?;

    let video = video_repo::get_video(pool.get_ref(), video_uuid)
        .await?
        .ok_or_else(|| AppError::NotFound("Video not found".to_string()))?;

    if video.user_id != user_id {
        return Err(AppError::Forbidden(
            "Not authorized to delete this video".to_string(),
        ));
    }

    if let Some(url) = &video.thumbnail_url {
        // Thumbnail files are named <video_id>.<ext>; remove by the URL's
        // final segment. A missing file is not an error.
        if let Some(file_name) = url.rsplit('/').next() {
            let path = Path::new(&config.assets.root).join(file_name);
            if let Err(err) = tokio::fs::remove_file(&path).await {
                tracing::debug!(%video_uuid, "thumbnail file removal failed: {}", err);
            }
        }
    }

    video_repo::delete_video(pool.get_ref(), video_uuid).await?;
    tracing::info!(%video_uuid, %user_id, "video deleted");

    Ok(HttpResponse::NoContent().finish())
}
