use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评审实体
//
// 每个 (paper, reviewer) 组合只保留一条记录，重复提交按 upsert 处理。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct Review {
    pub id: i64,
    pub paper_id: i64,
    pub reviewer_id: i64,
    pub comments: String,
    /// 有序的要点列表
    pub insights: Vec<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
