mod common;

use axum::{Router, middleware};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

use guidepost::api::middleware::session;
use guidepost::api::routes::{auth_routes, session_routes};

fn auth_server(state: guidepost::AppState) -> TestServer {
    let account = session_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));

    let app = Router::new()
        .nest("/api/auth", auth_routes().merge(account))
        .with_state(state);

    TestServer::new(app).unwrap()
}

fn extract_session_cookie(response: &axum_test::TestResponse) -> String {
    let set_cookie = response.header("set-cookie");
    let set_cookie = set_cookie.to_str().unwrap();

    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));

    set_cookie.split(';').next().unwrap().to_string()
}

#[sqlx::test]
async fn test_register_then_login(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = auth_server(state);

    let register = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Sam",
            "email": "sam@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    register.assert_status_ok();
    let body: Value = register.json();
    assert_eq!(body["success"], true);

    let login = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "sam@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    login.assert_status_ok();
    let body: Value = login.json();
    assert_eq!(body["user"]["email"], "sam@example.com");
    assert_eq!(body["user"]["role"], "admin");

    let cookie = extract_session_cookie(&login);
    assert!(cookie.starts_with("token="));
}

#[sqlx::test]
async fn test_register_duplicate_email(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = auth_server(state);

    common::create_test_user(&pool, "taken@example.com").await;

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Other",
            "email": "taken@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = auth_server(state);

    common::create_test_user(&pool, "sam@example.com").await;

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "sam@example.com",
            "password": "wrong-password"
        }))
        .await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_login_unknown_email(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = auth_server(state);

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "ghost@example.com",
            "password": "whatever-password"
        }))
        .await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_me_with_session(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let (_, cookie) = common::seed_admin(&pool, &state).await;
    let server = auth_server(state);

    let response = server
        .get("/api/auth/me")
        .add_header("Cookie", cookie)
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["user"]["email"], "admin@example.com");
}

#[sqlx::test]
async fn test_me_without_session(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = auth_server(state);

    let response = server.get("/api/auth/me").await;

    response.assert_status_unauthorized();
}

#[sqlx::test]
async fn test_logout_revokes_session(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let (_, cookie) = common::seed_admin(&pool, &state).await;
    let server = auth_server(state);

    let logout = server
        .post("/api/auth/logout")
        .add_header("Cookie", cookie.clone())
        .await;
    logout.assert_status_ok();

    let me = server.get("/api/auth/me").add_header("Cookie", cookie).await;
    me.assert_status_unauthorized();
}
