use super::entities::Assignment;
use serde::Serialize;
use ts_rs::TS;

// 指派列表项（关联论文与审稿人信息，按指派时间升序）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub paper_title: String,
    pub paper_track: String,
    pub reviewer_name: String,
}

// 批量指派结果
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignResult {
    pub assigned: Vec<i64>,
    pub duplicates: Vec<i64>,
}
