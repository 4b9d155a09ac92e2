/// Video Service - HTTP server
///
/// Serves the JSON API under /api and uploaded assets as static files.
use actix_web::{middleware as actix_middleware, web, App, HttpServer};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::io;
use std::str::FromStr;
use video_service::{handlers, Config, MIGRATOR};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Invalid config: {e}")))?;

    std::fs::create_dir_all(&config.assets.root)?;

    let connect_options = SqliteConnectOptions::from_str(&config.database.url)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Invalid DATABASE_URL: {e}")))?
        .create_if_missing(true);

    let db_pool = SqlitePoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(connect_options)
        .await
        .map_err(|e| {
            io::Error::new(io::ErrorKind::Other, format!("Failed to connect to database: {e}"))
        })?;

    MIGRATOR
        .run(&db_pool)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Migration failed: {e}")))?;

    let bind_address = format!("{}:{}", config.app.host, config.app.port);
    tracing::info!(%bind_address, env = %config.app.env, "video-service starting");

    let assets_mount = format!("/{}", config.assets.root.trim_matches('/'));
    let assets_root = config.assets.root.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(db_pool.clone()))
            .wrap(actix_middleware::Logger::default())
            .configure(handlers::configure)
            .service(actix_files::Files::new(&assets_mount, &assets_root))
    })
    .bind(&bind_address)?
    .run()
    .await
}
