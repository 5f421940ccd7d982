use super::entities::Paper;
use serde::Serialize;
use ts_rs::TS;

// 论文关联的作者信息（仅公开字段）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub struct PaperAuthor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub contact_number: Option<String>,
}

// 带关联信息的论文（作者 + 活动标题）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub struct PaperDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub paper: Paper,
    pub author: Option<PaperAuthor>,
    pub event_title: Option<String>,
}

// 审稿队列中的论文（附 reviewed 标记）
#[derive(Debug, Clone, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub struct AssignedPaper {
    #[serde(flatten)]
    #[ts(flatten)]
    pub paper: PaperDetail,
    pub reviewed: bool,
}
