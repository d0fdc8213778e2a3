//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{
    AffiliateLinkService, AuthService, GuideService, StatsService, TaxonomyService,
};
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::{
    PgAffiliateLinkRepository, PgCategoryRepository, PgClickRepository, PgGuideRepository,
    PgSessionRepository, PgStatsRepository, PgTagRepository, PgUserRepository,
};

/// Application state shared across requests.
///
/// Services are constructed once at startup (see `server::run`) and cloned
/// cheaply per request via `Arc`. `click_tx` is the sending half of the
/// bounded tracking channel; the receiving half lives in the background
/// click worker.
#[derive(Clone)]
pub struct AppState {
    pub affiliate_links: Arc<AffiliateLinkService<PgAffiliateLinkRepository, PgClickRepository>>,
    pub guides: Arc<GuideService<PgGuideRepository>>,
    pub taxonomy: Arc<TaxonomyService<PgCategoryRepository, PgTagRepository>>,
    pub stats: Arc<StatsService<PgStatsRepository>>,
    pub auth: Arc<AuthService<PgUserRepository, PgSessionRepository>>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}
