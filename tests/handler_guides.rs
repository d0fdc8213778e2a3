mod common;

use axum::{Router, middleware};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

use guidepost::api::middleware::session;
use guidepost::api::routes::{admin_routes, public_content_routes};

async fn guide_server(pool: PgPool) -> (TestServer, String, i64) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let (_, cookie) = common::seed_admin(&pool, &state).await;

    let category_id = common::create_test_category(&pool, "Office", "office").await;

    let app = Router::new()
        .nest(
            "/api/admin",
            admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), session::layer)),
        )
        .nest("/api", public_content_routes())
        .with_state(state);

    (TestServer::new(app).unwrap(), cookie, category_id)
}

#[sqlx::test]
async fn test_create_guide_derives_slug_and_author(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool).await;

    let response = server
        .post("/api/admin/guides")
        .add_header("Cookie", cookie)
        .json(&json!({
            "title": "Best Standing Desks 2026",
            "summary": "Our tested picks",
            "content": "<p>Desks...</p>",
            "categoryId": category_id
        }))
        .await;

    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["slug"], "best-standing-desks-2026");
    assert_eq!(body["status"], "draft");
    assert_eq!(body["categoryName"], "Office");
    assert_eq!(body["authorName"], "Test Admin");
}

#[sqlx::test]
async fn test_create_guide_missing_fields(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool).await;

    let response = server
        .post("/api/admin/guides")
        .add_header("Cookie", cookie)
        .json(&json!({
            "title": "No content",
            "summary": "",
            "content": "",
            "categoryId": category_id
        }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_drafts_hidden_from_public_surface(pool: PgPool) {
    let (server, _cookie, category_id) = guide_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    common::create_test_guide(&pool, "Draft Guide", "draft-guide", category_id, author_id, "draft")
        .await;
    common::create_test_guide(
        &pool,
        "Live Guide",
        "live-guide",
        category_id,
        author_id,
        "published",
    )
    .await;

    let listed: Value = server.get("/api/guides").await.json();
    let slugs: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["slug"].as_str().unwrap())
        .collect();

    assert_eq!(slugs, vec!["live-guide"]);

    server.get("/api/guides/draft-guide").await.assert_status_not_found();
    server.get("/api/guides/live-guide").await.assert_status_ok();
}

#[sqlx::test]
async fn test_publishing_makes_guide_visible(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    let guide_id = common::create_test_guide(
        &pool,
        "Hidden Gem",
        "hidden-gem",
        category_id,
        author_id,
        "draft",
    )
    .await;

    server.get("/api/guides/hidden-gem").await.assert_status_not_found();

    let update = server
        .put(&format!("/api/admin/guides/{guide_id}"))
        .add_header("Cookie", cookie)
        .json(&json!({ "status": "published" }))
        .await;
    update.assert_status_ok();

    server.get("/api/guides/hidden-gem").await.assert_status_ok();
}

#[sqlx::test]
async fn test_admin_list_filters_by_status(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    common::create_test_guide(&pool, "One", "one", category_id, author_id, "draft").await;
    common::create_test_guide(&pool, "Two", "two", category_id, author_id, "published").await;

    let drafts: Value = server
        .get("/api/admin/guides?status=draft")
        .add_header("Cookie", cookie.clone())
        .await
        .json();
    assert_eq!(drafts.as_array().unwrap().len(), 1);
    assert_eq!(drafts[0]["slug"], "one");

    let all: Value = server
        .get("/api/admin/guides")
        .add_header("Cookie", cookie.clone())
        .await
        .json();
    assert_eq!(all.as_array().unwrap().len(), 2);

    server
        .get("/api/admin/guides?status=archived")
        .add_header("Cookie", cookie)
        .await
        .assert_status_bad_request();
}

#[sqlx::test]
async fn test_unknown_status_value_rejected_on_update(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    let guide_id =
        common::create_test_guide(&pool, "Guide", "guide", category_id, author_id, "draft").await;

    let response = server
        .put(&format!("/api/admin/guides/{guide_id}"))
        .add_header("Cookie", cookie)
        .json(&json!({ "status": "archived" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_guide_tags_round_trip(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool.clone()).await;

    let tag_id: i64 = sqlx::query_scalar(
        "INSERT INTO tags (name, slug) VALUES ('Ergonomics', 'ergonomics') RETURNING id",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    let created: Value = server
        .post("/api/admin/guides")
        .add_header("Cookie", cookie.clone())
        .json(&json!({
            "title": "Tagged Guide",
            "summary": "s",
            "content": "c",
            "categoryId": category_id,
            "tagIds": [tag_id]
        }))
        .await
        .json();

    assert_eq!(created["tags"][0]["slug"], "ergonomics");

    let guide_id = created["id"].as_i64().unwrap();

    // Replacing the tag set with an empty list detaches everything.
    let updated: Value = server
        .put(&format!("/api/admin/guides/{guide_id}"))
        .add_header("Cookie", cookie)
        .json(&json!({ "tagIds": [] }))
        .await
        .json();

    assert_eq!(updated["tags"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_delete_guide(pool: PgPool) {
    let (server, cookie, category_id) = guide_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    let guide_id = common::create_test_guide(
        &pool,
        "Short Lived",
        "short-lived",
        category_id,
        author_id,
        "published",
    )
    .await;

    let response = server
        .delete(&format!("/api/admin/guides/{guide_id}"))
        .add_header("Cookie", cookie)
        .await;
    assert_eq!(response.status_code(), 204);

    server.get("/api/guides/short-lived").await.assert_status_not_found();
}
