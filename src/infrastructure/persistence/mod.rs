//! PostgreSQL repository implementations.
//!
//! Each repository receives an explicitly constructed [`sqlx::PgPool`] at
//! construction time; the pool is opened once at process start and shared
//! via `Arc`. There is no global or lazily initialized database handle.

pub mod pg_affiliate_link_repository;
pub mod pg_category_repository;
pub mod pg_click_repository;
pub mod pg_guide_repository;
pub mod pg_session_repository;
pub mod pg_stats_repository;
pub mod pg_tag_repository;
pub mod pg_user_repository;

pub use pg_affiliate_link_repository::PgAffiliateLinkRepository;
pub use pg_category_repository::PgCategoryRepository;
pub use pg_click_repository::PgClickRepository;
pub use pg_guide_repository::PgGuideRepository;
pub use pg_session_repository::PgSessionRepository;
pub use pg_stats_repository::PgStatsRepository;
pub use pg_tag_repository::PgTagRepository;
pub use pg_user_repository::PgUserRepository;
