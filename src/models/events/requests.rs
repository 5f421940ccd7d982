use serde::Deserialize;
use ts_rs::TS;

// 活动创建请求（存储层使用，由 multipart 表单解析得到）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub date: chrono::DateTime<chrono::Utc>,
    pub banner_url: Option<String>,
    pub created_by: i64,
}

// 指派审稿人请求：一名审稿人 + 一批论文
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct AssignReviewerRequest {
    pub reviewer_id: i64,
    pub paper_ids: Vec<i64>,
}
