mod common;

use axum::{Router, middleware};
use axum_test::TestServer;
use serde_json::Value;
use sqlx::PgPool;

use guidepost::api::middleware::session;
use guidepost::api::routes::admin_routes;

async fn stats_server(pool: PgPool) -> (TestServer, String) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let (_, cookie) = common::seed_admin(&pool, &state).await;

    let app = Router::new()
        .nest(
            "/api/admin",
            admin_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), session::layer)),
        )
        .with_state(state);

    (TestServer::new(app).unwrap(), cookie)
}

#[sqlx::test]
async fn test_dashboard_aggregates(pool: PgPool) {
    let (server, cookie) = stats_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    let category_id = common::create_test_category(&pool, "Office", "office").await;

    let popular = common::create_test_guide(
        &pool,
        "Popular Guide",
        "popular-guide",
        category_id,
        author_id,
        "published",
    )
    .await;
    common::create_test_guide(&pool, "Quiet Guide", "quiet-guide", category_id, author_id, "draft")
        .await;

    let link_id = common::create_test_link_for_guide(
        &pool,
        "Popular Deal",
        "popular-deal",
        "https://a.example",
        popular,
    )
    .await;

    sqlx::query("UPDATE affiliate_links SET click_count = 7 WHERE id = $1")
        .bind(link_id)
        .execute(&pool)
        .await
        .unwrap();

    for _ in 0..3 {
        sqlx::query(
            "INSERT INTO click_events (link_id, guide_id, device) VALUES ($1, $2, 'desktop')",
        )
        .bind(link_id)
        .bind(popular)
        .execute(&pool)
        .await
        .unwrap();
    }

    let body: Value = server
        .get("/api/admin/stats")
        .add_header("Cookie", cookie)
        .await
        .json();

    assert_eq!(body["totalGuides"], 2);
    assert_eq!(body["publishedGuides"], 1);
    assert_eq!(body["draftGuides"], 1);
    assert_eq!(body["totalCategories"], 1);
    assert_eq!(body["totalClicks"], 7);
    assert_eq!(body["topGuide"]["slug"], "popular-guide");
    assert_eq!(body["topCategory"]["slug"], "office");
    assert_eq!(body["trending"][0]["clicks"], 3);
    assert_eq!(body["recentGuides"].as_array().unwrap().len(), 2);
}

#[sqlx::test]
async fn test_dashboard_top_guide_falls_back_to_recent(pool: PgPool) {
    let (server, cookie) = stats_server(pool.clone()).await;

    let author_id = common::create_test_user(&pool, "writer@example.com").await;
    let category_id = common::create_test_category(&pool, "Audio", "audio").await;
    common::create_test_guide(
        &pool,
        "Only Guide",
        "only-guide",
        category_id,
        author_id,
        "published",
    )
    .await;

    let body: Value = server
        .get("/api/admin/stats")
        .add_header("Cookie", cookie)
        .await
        .json();

    // No clicks attributed to any guide yet; the most recent guide fills in.
    assert_eq!(body["topGuide"]["slug"], "only-guide");
    assert_eq!(body["trending"].as_array().unwrap().len(), 0);
}

#[sqlx::test]
async fn test_dashboard_empty_database(pool: PgPool) {
    let (server, cookie) = stats_server(pool).await;

    let body: Value = server
        .get("/api/admin/stats")
        .add_header("Cookie", cookie)
        .await
        .json();

    assert_eq!(body["totalGuides"], 0);
    assert_eq!(body["totalClicks"], 0);
    assert_eq!(body["topGuide"], Value::Null);
    assert_eq!(body["topCategory"], Value::Null);
}
