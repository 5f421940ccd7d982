use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 审稿指派关系
//
// 持久化的 (event, reviewer, paper) 三元组；(paper, reviewer) 全局唯一。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub event_id: i64,
    pub reviewer_id: i64,
    pub paper_id: i64,
    pub assigned_at: chrono::DateTime<chrono::Utc>,
}
