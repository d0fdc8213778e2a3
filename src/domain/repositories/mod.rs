//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete
//! implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AffiliateLinkRepository`] - Affiliate link CRUD, slug resolution, and
//!   the atomic click-counter increment
//! - [`ClickRepository`] - Append-only click ledger
//! - [`GuideRepository`] - Guide CRUD and publish-state queries
//! - [`CategoryRepository`] / [`TagRepository`] - Taxonomy
//! - [`UserRepository`] / [`SessionRepository`] - Accounts and sessions
//! - [`StatsRepository`] - Dashboard aggregates and trending ranking

pub mod affiliate_link_repository;
pub mod category_repository;
pub mod click_repository;
pub mod guide_repository;
pub mod session_repository;
pub mod stats_repository;
pub mod tag_repository;
pub mod user_repository;

pub use affiliate_link_repository::AffiliateLinkRepository;
pub use category_repository::CategoryRepository;
pub use click_repository::ClickRepository;
pub use guide_repository::GuideRepository;
pub use session_repository::{Session, SessionRepository};
pub use stats_repository::{CategoryGuideCount, GuideClicks, GuideStatusCounts, StatsRepository};
pub use tag_repository::TagRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use affiliate_link_repository::MockAffiliateLinkRepository;
#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use click_repository::MockClickRepository;
#[cfg(test)]
pub use guide_repository::MockGuideRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use stats_repository::MockStatsRepository;
#[cfg(test)]
pub use tag_repository::MockTagRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
