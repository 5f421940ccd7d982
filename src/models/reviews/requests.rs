use serde::Deserialize;
use ts_rs::TS;

// 提交评审请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/review.ts")]
pub struct SubmitReviewRequest {
    pub comments: String,
    #[serde(default)]
    pub insights: Vec<String>,
}
