use serde::Serialize;
use ts_rs::TS;

use crate::models::events::entities::Event;
use crate::models::papers::responses::PaperDetail;

// 全局概览
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct GlobalSummary {
    pub total_users: i64,
    pub total_events: i64,
    pub total_papers: i64,
    pub total_reviews: i64,
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct AdminStatsResponse {
    pub summary: GlobalSummary,
    pub recent_events: Vec<Event>,
    pub recent_papers: Vec<PaperDetail>,
}

// 按状态统计的论文数
//
// 不变量: total == selected + rejected + pending
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct PaperStatusCounts {
    pub total: i64,
    pub selected: i64,
    pub rejected: i64,
    pub pending: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct ReviewCounts {
    pub total: i64,
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct AssignmentCounts {
    pub total: i64,
    /// 指派关系中不同审稿人的数量
    pub reviewers_assigned: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct TrackCount {
    pub track: String,
    pub count: i64,
}

// 单个活动的统计报表
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct EventStatsResponse {
    pub event: String,
    pub papers: PaperStatusCounts,
    pub reviews: ReviewCounts,
    pub assignments: AssignmentCounts,
    pub track_breakdown: Vec<TrackCount>,
}

// 审稿人催审列表项
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/admin.ts")]
pub struct ReviewerReminder {
    pub name: String,
    pub email: String,
    pub total_reviews: i64,
}
