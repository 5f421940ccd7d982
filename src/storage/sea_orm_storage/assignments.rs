use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::entity::{papers, users};
use crate::errors::{ConfSysError, Result};
use crate::models::assignments::responses::AssignmentListItem;
use crate::models::papers::{entities::PaperStatus, responses::AssignedPaper};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::{HashMap, HashSet};

impl SeaOrmStorage {
    /// 创建审稿指派
    ///
    /// (paper_id, reviewer_id) 上有唯一索引，重复指派时 ON CONFLICT
    /// 不写入任何行，返回 false 由调用方决定如何上报。
    pub async fn create_assignment_impl(
        &self,
        event_id: i64,
        reviewer_id: i64,
        paper_id: i64,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            event_id: Set(event_id),
            reviewer_id: Set(reviewer_id),
            paper_id: Set(paper_id),
            assigned_at: Set(now),
            ..Default::default()
        };

        let rows = Assignments::insert(model)
            .on_conflict(
                OnConflict::columns([Column::PaperId, Column::ReviewerId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("创建指派失败: {e}")))?;

        Ok(rows > 0)
    }

    /// 判断指派是否存在
    pub async fn assignment_exists_impl(&self, paper_id: i64, reviewer_id: i64) -> Result<bool> {
        let count = Assignments::find()
            .filter(Column::PaperId.eq(paper_id))
            .filter(Column::ReviewerId.eq(reviewer_id))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询指派记录失败: {e}")))?;

        Ok(count > 0)
    }

    /// 列出活动下的全部指派，附带论文与审稿人信息，按指派时间升序
    pub async fn list_assignments_for_event_impl(
        &self,
        event_id: i64,
    ) -> Result<Vec<AssignmentListItem>> {
        let models = Assignments::find()
            .filter(Column::EventId.eq(event_id))
            .order_by_asc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询指派列表失败: {e}")))?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let paper_ids: Vec<i64> = models.iter().map(|m| m.paper_id).collect();
        let reviewer_ids: Vec<i64> = models.iter().map(|m| m.reviewer_id).collect();

        let paper_info: HashMap<i64, (String, String)> = papers::Entity::find()
            .filter(papers::Column::Id.is_in(paper_ids))
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询指派论文失败: {e}")))?
            .into_iter()
            .map(|p| (p.id, (p.title, p.track)))
            .collect();

        let reviewer_names: HashMap<i64, String> = users::Entity::find()
            .filter(users::Column::Id.is_in(reviewer_ids))
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询指派审稿人失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let (paper_title, paper_track) = paper_info
                    .get(&m.paper_id)
                    .cloned()
                    .unwrap_or_default();
                let reviewer_name = reviewer_names
                    .get(&m.reviewer_id)
                    .cloned()
                    .unwrap_or_default();
                AssignmentListItem {
                    assignment: m.into_assignment(),
                    paper_title,
                    paper_track,
                    reviewer_name,
                }
            })
            .collect())
    }

    /// 审稿人的待审队列：被指派且仍可评审的论文详情 + 是否已提交评审
    ///
    /// 只返回 submitted / under_review 状态的论文，
    /// 已有结论（接收/拒绝/退回修改）的指派不再出现在队列里。
    pub async fn list_assigned_papers_impl(&self, reviewer_id: i64) -> Result<Vec<AssignedPaper>> {
        let assignments = Assignments::find()
            .filter(Column::ReviewerId.eq(reviewer_id))
            .order_by_asc(Column::AssignedAt)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询审稿队列失败: {e}")))?;

        if assignments.is_empty() {
            return Ok(Vec::new());
        }

        let paper_ids: Vec<i64> = assignments.iter().map(|m| m.paper_id).collect();

        // 已评审的论文集合，一次查询避免逐篇检查
        let reviewed: HashSet<i64> = crate::entity::reviews::Entity::find()
            .select_only()
            .column(crate::entity::reviews::Column::PaperId)
            .filter(crate::entity::reviews::Column::ReviewerId.eq(reviewer_id))
            .filter(crate::entity::reviews::Column::PaperId.is_in(paper_ids.clone()))
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询评审记录失败: {e}")))?
            .into_iter()
            .collect();

        let paper_models = papers::Entity::find()
            .filter(papers::Column::Id.is_in(paper_ids.clone()))
            .filter(papers::Column::Status.is_in([
                PaperStatus::Submitted.to_string(),
                PaperStatus::UnderReview.to_string(),
            ]))
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询指派论文失败: {e}")))?;

        let mut details: HashMap<i64, crate::models::papers::responses::PaperDetail> = self
            .attach_paper_details(paper_models)
            .await?
            .into_iter()
            .map(|d| (d.paper.id, d))
            .collect();

        // 保持指派顺序输出
        Ok(paper_ids
            .into_iter()
            .filter_map(|id| {
                details.remove(&id).map(|detail| AssignedPaper {
                    reviewed: reviewed.contains(&id),
                    paper: detail,
                })
            })
            .collect())
    }

    /// 统计活动下的指派数量
    pub async fn count_assignments_for_event_impl(&self, event_id: i64) -> Result<u64> {
        let count = Assignments::find()
            .filter(Column::EventId.eq(event_id))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计指派数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计活动下被指派的不同审稿人数量
    pub async fn count_distinct_reviewers_for_event_impl(&self, event_id: i64) -> Result<u64> {
        let reviewer_ids: Vec<i64> = Assignments::find()
            .select_only()
            .column(Column::ReviewerId)
            .distinct()
            .filter(Column::EventId.eq(event_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计指派审稿人失败: {e}")))?;

        Ok(reviewer_ids.len() as u64)
    }
}
