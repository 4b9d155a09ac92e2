/// HTTP handlers for video-service
use actix_web::{web, HttpResponse};

pub mod thumbnails;
pub mod users;
pub mod videos;

pub use thumbnails::upload_thumbnail;
pub use users::{create_user, login};
pub use videos::{create_video, delete_video, get_video, list_videos};

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

/// Register the API route table. Static asset serving is mounted separately
/// in `main` so tests can run the API against a bare service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/healthz", web::get().to(healthz))
            .route("/users", web::post().to(users::create_user))
            .route("/login", web::post().to(users::login))
            .route("/videos", web::post().to(videos::create_video))
            .route("/videos", web::get().to(videos::list_videos))
            .route("/videos/{video_id}", web::get().to(videos::get_video))
            .route("/videos/{video_id}", web::delete().to(videos::delete_video))
            .route(
                "/videos/{video_id}/thumbnail",
                web::post().to(thumbnails::upload_thumbnail),
            ),
    );
}
