use std::sync::Arc;

use crate::models::{
    admin::responses::{PaperStatusCounts, TrackCount},
    assignments::responses::AssignmentListItem,
    events::{entities::Event, requests::CreateEventRequest},
    papers::{
        entities::{Paper, PaperStatus},
        requests::CreatePaperRequest,
        responses::{AssignedPaper, PaperDetail},
    },
    reviews::{entities::Review, requests::SubmitReviewRequest, responses::ReviewWithReviewer},
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 列出持有指定角色的用户
    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 活动管理方法
    // 创建活动
    async fn create_event(&self, event: CreateEventRequest) -> Result<Event>;
    // 通过ID获取活动信息
    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>>;
    // 列出全部活动（按活动日期升序）
    async fn list_events(&self) -> Result<Vec<Event>>;
    // 列出最近创建的活动
    async fn list_recent_events(&self, limit: u64) -> Result<Vec<Event>>;
    // 统计活动数量
    async fn count_events(&self) -> Result<u64>;

    /// 论文管理方法
    // 创建论文（初始状态 submitted）
    async fn create_paper(&self, paper: CreatePaperRequest) -> Result<Paper>;
    // 通过ID获取论文
    async fn get_paper_by_id(&self, id: i64) -> Result<Option<Paper>>;
    // 通过ID获取论文及作者/活动关联信息
    async fn get_paper_detail(&self, id: i64) -> Result<Option<PaperDetail>>;
    // 列出作者的全部投稿
    async fn list_papers_by_author(&self, author_id: i64) -> Result<Vec<PaperDetail>>;
    // 列出活动下的论文，可按状态过滤
    async fn list_papers_by_event(
        &self,
        event_id: i64,
        status: Option<PaperStatus>,
    ) -> Result<Vec<PaperDetail>>;
    // 原子状态迁移：仅当当前状态等于 from 时更新为 to
    async fn update_paper_status_cas(
        &self,
        paper_id: i64,
        from: PaperStatus,
        to: PaperStatus,
    ) -> Result<bool>;
    // 列出最近提交的论文
    async fn list_recent_papers(&self, limit: u64) -> Result<Vec<PaperDetail>>;
    // 统计论文数量
    async fn count_papers(&self) -> Result<u64>;
    // 活动下按状态统计论文数量
    async fn count_event_papers_by_status(&self, event_id: i64) -> Result<PaperStatusCounts>;
    // 活动下按赛道统计论文数量
    async fn track_breakdown_for_event(&self, event_id: i64) -> Result<Vec<TrackCount>>;

    /// 评审管理方法
    // 提交或覆盖评审（每个 (paper, reviewer) 至多一条）
    async fn upsert_review(
        &self,
        paper_id: i64,
        reviewer_id: i64,
        review: SubmitReviewRequest,
    ) -> Result<Review>;
    // 列出论文的全部评审（含评审人信息）
    async fn list_reviews_for_paper(&self, paper_id: i64) -> Result<Vec<ReviewWithReviewer>>;
    // 统计评审数量
    async fn count_reviews(&self) -> Result<u64>;
    // 统计活动下论文收到的评审数量
    async fn count_reviews_for_event(&self, event_id: i64) -> Result<u64>;
    // 统计评审人提交的评审数量
    async fn count_reviews_by_reviewer(&self, reviewer_id: i64) -> Result<u64>;

    /// 审稿指派管理方法
    // 创建指派，若 (paper, reviewer) 已存在则返回 false
    async fn create_assignment(
        &self,
        event_id: i64,
        reviewer_id: i64,
        paper_id: i64,
    ) -> Result<bool>;
    // 判断指派是否存在
    async fn assignment_exists(&self, paper_id: i64, reviewer_id: i64) -> Result<bool>;
    // 列出活动下的全部指派（含论文与审稿人信息）
    async fn list_assignments_for_event(&self, event_id: i64) -> Result<Vec<AssignmentListItem>>;
    // 审稿人的待审队列（仅 submitted / under_review 的论文 + 是否已评审）
    async fn list_assigned_papers(&self, reviewer_id: i64) -> Result<Vec<AssignedPaper>>;
    // 统计活动下的指派数量
    async fn count_assignments_for_event(&self, event_id: i64) -> Result<u64>;
    // 统计活动下被指派的不同审稿人数量
    async fn count_distinct_reviewers_for_event(&self, event_id: i64) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
