//! Business logic services for the application layer.

pub mod affiliate_link_service;
pub mod auth_service;
pub mod guide_service;
pub mod stats_service;
pub mod taxonomy_service;

pub use affiliate_link_service::{AffiliateLinkService, LinkActivity};
pub use auth_service::AuthService;
pub use guide_service::{GuideDraft, GuideService};
pub use stats_service::{DashboardStats, StatsService, TopGuide};
pub use taxonomy_service::TaxonomyService;
