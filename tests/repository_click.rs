mod common;

use std::sync::Arc;

use sqlx::PgPool;

use guidepost::domain::entities::NewClick;
use guidepost::domain::repositories::ClickRepository;
use guidepost::infrastructure::persistence::PgClickRepository;

fn repo(pool: &PgPool) -> PgClickRepository {
    PgClickRepository::new(Arc::new(pool.clone()))
}

fn new_click(link_id: i64, device: &str, ip: &str) -> NewClick {
    NewClick {
        link_id,
        guide_id: None,
        device: Some(device.to_string()),
        referrer: Some("direct".to_string()),
        user_agent: Some("TestBot/1.0".to_string()),
        ip_address: Some(ip.to_string()),
    }
}

#[sqlx::test]
async fn test_record_and_count(pool: PgPool) {
    let repo = repo(&pool);

    let link_id = common::create_test_link(&pool, "Deal", "deal", "https://a.example").await;

    let recorded = repo.record(new_click(link_id, "mobile", "203.0.113.9")).await.unwrap();

    assert_eq!(recorded.link_id, link_id);
    assert_eq!(recorded.device.as_deref(), Some("mobile"));

    assert_eq!(repo.count_for_link(link_id).await.unwrap(), 1);
    assert_eq!(repo.count_for_link(999_999).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_recent_ordering_and_limit(pool: PgPool) {
    let repo = repo(&pool);

    let link_id = common::create_test_link(&pool, "Deal", "deal", "https://a.example").await;

    for i in 0..5 {
        let click = repo
            .record(new_click(link_id, "desktop", &format!("203.0.113.{i}")))
            .await
            .unwrap();

        // Spread the timestamps so ordering is deterministic.
        sqlx::query("UPDATE click_events SET occurred_at = occurred_at + ($2 || ' seconds')::interval WHERE id = $1")
            .bind(click.id)
            .bind(i.to_string())
            .execute(&pool)
            .await
            .unwrap();
    }

    let recent = repo.recent_for_link(link_id, 3).await.unwrap();

    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].ip_address.as_deref(), Some("203.0.113.4"));
    assert_eq!(recent[2].ip_address.as_deref(), Some("203.0.113.2"));
}

#[sqlx::test]
async fn test_ledger_survives_link_deletion(pool: PgPool) {
    let repo = repo(&pool);

    let link_id = common::create_test_link(&pool, "Doomed", "doomed", "https://a.example").await;

    repo.record(new_click(link_id, "tablet", "203.0.113.1")).await.unwrap();

    sqlx::query("DELETE FROM affiliate_links WHERE id = $1")
        .bind(link_id)
        .execute(&pool)
        .await
        .unwrap();

    // Hard-deleting the link must not erase its click history.
    assert_eq!(repo.count_for_link(link_id).await.unwrap(), 1);
}
