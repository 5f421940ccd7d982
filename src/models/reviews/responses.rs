use super::entities::Review;
use serde::Serialize;
use ts_rs::TS;

// 评审人公开信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewerInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// 带评审人信息的评审记录
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct ReviewWithReviewer {
    #[serde(flatten)]
    #[ts(flatten)]
    pub review: Review,
    pub reviewer: Option<ReviewerInfo>,
}
