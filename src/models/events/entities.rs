use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 活动（会议/征稿活动）实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
    pub banner_url: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
