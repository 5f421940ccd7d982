pub mod admin;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod events;
pub mod papers;
pub mod reviews;
pub mod users;

pub use common::response::{ApiResponse, ErrorCode};

/// 程序启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
