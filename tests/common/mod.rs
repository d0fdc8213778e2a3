#![allow(dead_code)]

use std::sync::Arc;

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString, rand_core::OsRng};
use sqlx::PgPool;
use tokio::sync::mpsc;

use guidepost::application::services::{
    AffiliateLinkService, AuthService, GuideService, StatsService, TaxonomyService,
};
use guidepost::domain::click_event::ClickEvent;
use guidepost::infrastructure::persistence::{
    PgAffiliateLinkRepository, PgCategoryRepository, PgClickRepository, PgGuideRepository,
    PgSessionRepository, PgStatsRepository, PgTagRepository, PgUserRepository,
};
use guidepost::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";
pub const TEST_PASSWORD: &str = "hunter2hunter2";

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    create_test_state_with_capacity(pool, 100)
}

pub fn create_test_state_with_capacity(
    pool: PgPool,
    click_queue_capacity: usize,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let pool = Arc::new(pool);
    let (tx, rx) = mpsc::channel(click_queue_capacity);

    let link_repo = Arc::new(PgAffiliateLinkRepository::new(pool.clone()));
    let click_repo = Arc::new(PgClickRepository::new(pool.clone()));
    let guide_repo = Arc::new(PgGuideRepository::new(pool.clone()));
    let category_repo = Arc::new(PgCategoryRepository::new(pool.clone()));
    let tag_repo = Arc::new(PgTagRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let session_repo = Arc::new(PgSessionRepository::new(pool.clone()));
    let stats_repo = Arc::new(PgStatsRepository::new(pool.clone()));

    let state = AppState {
        affiliate_links: Arc::new(AffiliateLinkService::new(link_repo, click_repo)),
        guides: Arc::new(GuideService::new(guide_repo)),
        taxonomy: Arc::new(TaxonomyService::new(category_repo, tag_repo)),
        stats: Arc::new(StatsService::new(stats_repo)),
        auth: Arc::new(AuthService::new(
            user_repo,
            session_repo,
            TEST_SIGNING_SECRET.to_string(),
            24,
            None,
        )),
        click_tx: tx,
    };

    (state, rx)
}

pub async fn create_test_user(pool: &PgPool, email: &str) -> i64 {
    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .unwrap()
        .to_string();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, password_hash, role) \
         VALUES ('Test Admin', $1, $2, 'admin') RETURNING id",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Creates a user and logs them in, returning `(user_id, cookie_value)`.
pub async fn seed_admin(pool: &PgPool, state: &AppState) -> (i64, String) {
    let user_id = create_test_user(pool, "admin@example.com").await;

    let (_, token) = state
        .auth
        .login("admin@example.com", TEST_PASSWORD)
        .await
        .unwrap();

    (user_id, format!("token={token}"))
}

pub async fn create_test_link(pool: &PgPool, name: &str, slug: &str, url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO affiliate_links (name, slug, original_url) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .bind(url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_link_for_guide(
    pool: &PgPool,
    name: &str,
    slug: &str,
    url: &str,
    guide_id: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO affiliate_links (name, slug, original_url, guide_id) \
         VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .bind(url)
    .bind(guide_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_category(pool: &PgPool, name: &str, slug: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(slug)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_guide(
    pool: &PgPool,
    title: &str,
    slug: &str,
    category_id: i64,
    author_id: i64,
    status: &str,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO guides (title, slug, summary, content, category_id, author_id, status) \
         VALUES ($1, $2, 'Summary', '<p>Content</p>', $3, $4, $5) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .bind(category_id)
    .bind(author_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn link_click_count(pool: &PgPool, id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT click_count FROM affiliate_links WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn ledger_count(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM click_events WHERE link_id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
