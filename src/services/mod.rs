pub mod admin;
pub mod auth;
pub mod events;
pub mod papers;
pub mod reviews;
pub mod uploads;

pub use admin::AdminService;
pub use auth::AuthService;
pub use events::EventService;
pub use papers::PaperService;
pub use reviews::ReviewService;
pub use uploads::UploadService;
