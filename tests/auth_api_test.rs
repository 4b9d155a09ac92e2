/// API tests for registration and login
use actix_web::{test, web, App};
use tempfile::TempDir;

use video_service::handlers;
use video_service::models::{LoginResponse, UserResponse};

mod common;

macro_rules! init_app {
    ($pool:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($config.clone()))
                .app_data(web::Data::new($pool.clone()))
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_rt::test]
async fn register_and_login_round_trip() {
    let pool = common::test_pool().await;
    let assets = TempDir::new().unwrap();
    let config = common::test_config(assets.path());
    let app = init_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({"email": "new@example.com", "password": "password-123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body = test::read_body(resp).await;
    let raw: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(raw.get("password_hash").is_none(), "hash must never leak");
    let user: UserResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(user.email, "new@example.com");

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({"email": "new@example.com", "password": "password-123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let login: LoginResponse = test::read_body_json(resp).await;
    assert_eq!(login.id, user.id);

    // The issued token works against an authenticated route.
    let req = test::TestRequest::get()
        .uri("/api/videos")
        .insert_header(("Authorization", format!("Bearer {}", login.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_rt::test]
async fn duplicate_email_rejected() {
    let pool = common::test_pool().await;
    let assets = TempDir::new().unwrap();
    let config = common::test_config(assets.path());
    let app = init_app!(pool, config);

    let payload = serde_json::json!({"email": "dup@example.com", "password": "password-123"});
    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(&payload)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_rt::test]
async fn invalid_registration_input_rejected() {
    let pool = common::test_pool().await;
    let assets = TempDir::new().unwrap();
    let config = common::test_config(assets.path());
    let app = init_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({"email": "not-an-email", "password": "password-123"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({"email": "ok@example.com", "password": "short"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 400);
}

#[actix_rt::test]
async fn wrong_credentials_unauthorized() {
    let pool = common::test_pool().await;
    let assets = TempDir::new().unwrap();
    let config = common::test_config(assets.path());
    let app = init_app!(pool, config);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(serde_json::json!({"email": "who@example.com", "password": "password-123"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 201);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({"email": "who@example.com", "password": "wrong-password"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(serde_json::json!({"email": "nobody@example.com", "password": "password-123"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 401);
}
