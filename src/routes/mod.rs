pub mod admin;

pub mod auth;

pub mod events;

pub mod papers;

pub mod reviews;

pub mod uploads;

pub use admin::configure_admin_routes;
pub use auth::configure_auth_routes;
pub use events::configure_events_routes;
pub use papers::configure_papers_routes;
pub use reviews::configure_reviews_routes;
pub use uploads::configure_uploads_routes;
