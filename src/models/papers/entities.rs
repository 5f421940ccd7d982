use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::UserRole;

// 论文状态
//
// 生命周期: submitted → under_review → {revisions_requested, accepted, rejected}
// revisions_requested 在作者重新提交后回到 under_review。
// accepted / rejected 为终态。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub enum PaperStatus {
    Submitted,
    UnderReview,
    RevisionsRequested,
    Accepted,
    Rejected,
}

impl PaperStatus {
    /// 状态机合法边
    pub fn can_transition_to(&self, next: &PaperStatus) -> bool {
        use PaperStatus::*;
        matches!(
            (self, next),
            (Submitted, UnderReview)
                | (UnderReview, RevisionsRequested)
                | (UnderReview, Accepted)
                | (UnderReview, Rejected)
                | (RevisionsRequested, UnderReview)
        )
    }

    /// 进入该状态是否仅限协调员
    pub fn requires_coordinator(&self) -> bool {
        matches!(
            self,
            PaperStatus::RevisionsRequested | PaperStatus::Accepted | PaperStatus::Rejected
        )
    }

    /// 是否为终态
    pub fn is_terminal(&self) -> bool {
        matches!(self, PaperStatus::Accepted | PaperStatus::Rejected)
    }

    /// 审稿队列只包含这两个状态的论文
    pub fn available_for_review(&self) -> bool {
        matches!(self, PaperStatus::Submitted | PaperStatus::UnderReview)
    }

    /// 校验一次状态迁移，检查边合法性与执行者角色
    pub fn validate_transition(
        &self,
        next: &PaperStatus,
        actor_roles: &[UserRole],
    ) -> Result<(), String> {
        if !self.can_transition_to(next) {
            return Err(format!("Illegal status transition: {self} -> {next}"));
        }
        if next.requires_coordinator() && !actor_roles.contains(&UserRole::Coordinator) {
            return Err(format!("Only a coordinator may set status to {next}"));
        }
        Ok(())
    }
}

impl<'de> Deserialize<'de> for PaperStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<PaperStatus>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的论文状态: '{s}'. 支持的状态: submitted, under_review, revisions_requested, accepted, rejected"
            ))
        })
    }
}

impl std::fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaperStatus::Submitted => "submitted",
            PaperStatus::UnderReview => "under_review",
            PaperStatus::RevisionsRequested => "revisions_requested",
            PaperStatus::Accepted => "accepted",
            PaperStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for PaperStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(PaperStatus::Submitted),
            "under_review" => Ok(PaperStatus::UnderReview),
            "revisions_requested" => Ok(PaperStatus::RevisionsRequested),
            "accepted" => Ok(PaperStatus::Accepted),
            "rejected" => Ok(PaperStatus::Rejected),
            _ => Err(format!("Invalid paper status: {s}")),
        }
    }
}

// 论文实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/paper.ts")]
pub struct Paper {
    pub id: i64,
    pub title: String,
    /// 自由文本的主题方向（如 "AI/ML"），不做大小写归一化
    pub track: String,
    pub event_id: Option<i64>,
    pub file_url: String,
    pub author_id: i64,
    pub status: PaperStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use PaperStatus::*;

    #[test]
    fn test_legal_edges() {
        assert!(Submitted.can_transition_to(&UnderReview));
        assert!(UnderReview.can_transition_to(&RevisionsRequested));
        assert!(UnderReview.can_transition_to(&Accepted));
        assert!(UnderReview.can_transition_to(&Rejected));
        assert!(RevisionsRequested.can_transition_to(&UnderReview));
    }

    #[test]
    fn test_illegal_edges() {
        assert!(!Submitted.can_transition_to(&Accepted));
        assert!(!Submitted.can_transition_to(&Rejected));
        assert!(!Accepted.can_transition_to(&UnderReview));
        assert!(!Rejected.can_transition_to(&UnderReview));
        assert!(!UnderReview.can_transition_to(&Submitted));
        assert!(!Submitted.can_transition_to(&Submitted));
    }

    #[test]
    fn test_terminal_states_have_no_exits() {
        for next in [Submitted, UnderReview, RevisionsRequested, Accepted, Rejected] {
            assert!(!Accepted.can_transition_to(&next));
            assert!(!Rejected.can_transition_to(&next));
        }
    }

    #[test]
    fn test_coordinator_gate() {
        use crate::models::users::entities::UserRole;

        let reviewer_only = vec![UserRole::Reviewer];
        let coordinator = vec![UserRole::Reviewer, UserRole::Coordinator];

        // 审稿人可以推进 submitted → under_review
        assert!(Submitted
            .validate_transition(&UnderReview, &reviewer_only)
            .is_ok());
        // 但不能做出录用决定
        assert!(UnderReview
            .validate_transition(&Accepted, &reviewer_only)
            .is_err());
        assert!(UnderReview
            .validate_transition(&Accepted, &coordinator)
            .is_ok());
        assert!(UnderReview
            .validate_transition(&RevisionsRequested, &coordinator)
            .is_ok());
    }

    #[test]
    fn test_available_for_review() {
        assert!(Submitted.available_for_review());
        assert!(UnderReview.available_for_review());
        assert!(!RevisionsRequested.available_for_review());
        assert!(!Accepted.available_for_review());
        assert!(!Rejected.available_for_review());
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [Submitted, UnderReview, RevisionsRequested, Accepted, Rejected] {
            assert_eq!(status.to_string().parse::<PaperStatus>().unwrap(), status);
        }
        assert!("cancelled".parse::<PaperStatus>().is_err());
    }
}
