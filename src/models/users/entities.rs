use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色（封闭集合，边界处校验）
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub enum UserRole {
    Author,      // 投稿作者
    Reviewer,    // 审稿人
    Coordinator, // 会议协调员
}

impl UserRole {
    pub const AUTHOR: &'static str = "author";
    pub const REVIEWER: &'static str = "reviewer";
    pub const COORDINATOR: &'static str = "coordinator";

    pub fn coordinator_roles() -> &'static [&'static UserRole] {
        &[&Self::Coordinator]
    }
    pub fn reviewer_roles() -> &'static [&'static UserRole] {
        &[&Self::Reviewer, &Self::Coordinator]
    }
    pub fn author_roles() -> &'static [&'static UserRole] {
        &[&Self::Author]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Author, &Self::Reviewer, &Self::Coordinator]
    }

    /// 将原始字符串列表解析为合法的角色集合
    ///
    /// - 统一转为小写
    /// - 去重，保持首次出现顺序
    /// - 空集合或未知角色返回错误
    pub fn parse_role_set(raw: &[String]) -> Result<Vec<UserRole>, String> {
        if raw.is_empty() {
            return Err("At least one role must be selected".to_string());
        }
        let mut roles: Vec<UserRole> = Vec::new();
        for item in raw {
            let role = item.trim().to_lowercase().parse::<UserRole>()?;
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        Ok(roles)
    }

    /// 角色集合序列化为存储格式（逗号分隔）
    pub fn join_role_set(roles: &[UserRole]) -> String {
        roles
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// 从存储格式还原角色集合，未知角色直接忽略
    pub fn split_role_set(raw: &str) -> Vec<UserRole> {
        raw.split(',')
            .filter_map(|s| s.trim().parse::<UserRole>().ok())
            .collect()
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.to_lowercase().parse::<UserRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的用户角色: '{s}'. 支持的角色: author, reviewer, coordinator"
            ))
        })
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Author => write!(f, "{}", UserRole::AUTHOR),
            UserRole::Reviewer => write!(f, "{}", UserRole::REVIEWER),
            UserRole::Coordinator => write!(f, "{}", UserRole::COORDINATOR),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "author" => Ok(UserRole::Author),
            "reviewer" => Ok(UserRole::Reviewer),
            "coordinator" => Ok(UserRole::Coordinator),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub roles: Vec<UserRole>,
    pub contact_number: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn has_role(&self, role: &UserRole) -> bool {
        self.roles.contains(role)
    }

    fn role_strings(&self) -> Vec<String> {
        self.roles.iter().map(|r| r.to_string()).collect()
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(&self) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(self.id, &self.role_strings())
            .map_err(|e| format!("生成 token 对失败: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_role_set_lowercases_and_dedups() {
        let raw = vec![
            "Author".to_string(),
            "REVIEWER".to_string(),
            "author".to_string(),
        ];
        let roles = UserRole::parse_role_set(&raw).unwrap();
        assert_eq!(roles, vec![UserRole::Author, UserRole::Reviewer]);
    }

    #[test]
    fn test_parse_role_set_rejects_empty() {
        assert!(UserRole::parse_role_set(&[]).is_err());
    }

    #[test]
    fn test_parse_role_set_rejects_unknown() {
        let raw = vec!["admin".to_string()];
        assert!(UserRole::parse_role_set(&raw).is_err());
    }

    #[test]
    fn test_role_set_round_trip() {
        let roles = vec![UserRole::Author, UserRole::Coordinator];
        let joined = UserRole::join_role_set(&roles);
        assert_eq!(joined, "author,coordinator");
        assert_eq!(UserRole::split_role_set(&joined), roles);
    }

    #[test]
    fn test_split_role_set_ignores_unknown() {
        let roles = UserRole::split_role_set("author,admin,reviewer");
        assert_eq!(roles, vec![UserRole::Author, UserRole::Reviewer]);
    }
}
