//! HTTP request handlers.

pub mod affiliate_links;
pub mod auth;
pub mod guides;
pub mod health;
pub mod redirect;
pub mod stats;
pub mod taxonomy;

pub use affiliate_links::{
    create_affiliate_link_handler, delete_affiliate_link_handler, link_activity_handler,
    list_affiliate_links_handler, update_affiliate_link_handler,
};
pub use auth::{login_handler, logout_handler, me_handler, register_handler};
pub use guides::{
    admin_list_guides_handler, create_guide_handler, delete_guide_handler, get_guide_handler,
    list_published_guides_handler, published_guide_handler, update_guide_handler,
};
pub use health::health_handler;
pub use redirect::redirect_handler;
pub use stats::dashboard_stats_handler;
pub use taxonomy::{
    create_category_handler, create_tag_handler, delete_category_handler, delete_tag_handler,
    list_categories_handler, list_tags_handler, update_category_handler,
};
