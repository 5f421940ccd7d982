use super::entities::PaperStatus;
use serde::Deserialize;
use ts_rs::TS;

// 论文创建请求（存储层使用，由 multipart 表单解析得到）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub struct CreatePaperRequest {
    pub title: String,
    pub track: String,
    pub event_id: Option<i64>,
    pub file_url: String,
    pub author_id: i64,
}

// 状态迁移请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub struct TransitionStatusRequest {
    pub status: PaperStatus,
}
