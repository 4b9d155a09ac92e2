use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::models::Video;

pub async fn create_video(
    pool: &SqlitePool,
    user_id: Uuid,
    title: &str,
    description: Option<&str>,
) -> Result<Video, sqlx::Error> {
    let now = Utc::now();
    sqlx::query_as::<_, Video>(
        r#"
        INSERT INTO videos (id, user_id, title, description, thumbnail_url, created_at, updated_at)
        VALUES (?, ?, ?, ?, NULL, ?, ?)
        RETURNING id, user_id, title, description, thumbnail_url, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(title)
    .bind(description)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

pub async fn get_video(pool: &SqlitePool, id: Uuid) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        SELECT id, user_id, title, description, thumbnail_url, created_at, updated_at
        FROM videos WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn list_videos_by_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        SELECT id, user_id, title, description, thumbnail_url, created_at, updated_at
        FROM videos WHERE user_id = ?
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn set_thumbnail_url(
    pool: &SqlitePool,
    id: Uuid,
    thumbnail_url: &str,
) -> Result<Option<Video>, sqlx::Error> {
    sqlx::query_as::<_, Video>(
        r#"
        UPDATE videos SET thumbnail_url = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, user_id, title, description, thumbnail_url, created_at, updated_at
        "#,
    )
    .bind(thumbnail_url)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_video(pool: &SqlitePool, id: Uuid) -> Result<bool, sqlx::Error> {
    let res = sqlx::query("DELETE FROM videos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(res.rows_affected() > 0)
}
