use super::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户创建请求（存储层使用，password 已哈希）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roles: Vec<UserRole>,
    pub contact_number: Option<String>,
}
