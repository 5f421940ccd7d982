use super::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 审稿人列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct ReviewerListResponse {
    pub reviewers: Vec<User>,
}
