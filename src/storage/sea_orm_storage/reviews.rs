use super::SeaOrmStorage;
use crate::entity::papers;
use crate::entity::reviews::{ActiveModel, Column, Entity as Reviews};
use crate::entity::users;
use crate::errors::{ConfSysError, Result};
use crate::models::reviews::{
    entities::Review,
    requests::SubmitReviewRequest,
    responses::{ReviewWithReviewer, ReviewerInfo},
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 提交或覆盖评审
    ///
    /// (paper_id, reviewer_id) 上有唯一索引，重复提交走 ON CONFLICT
    /// 更新 comments/insights，不会产生第二条记录。
    pub async fn upsert_review_impl(
        &self,
        paper_id: i64,
        reviewer_id: i64,
        req: SubmitReviewRequest,
    ) -> Result<Review> {
        let now = chrono::Utc::now().timestamp();
        let insights_json = serde_json::to_string(&req.insights)
            .map_err(|e| ConfSysError::serialization(format!("评审要点序列化失败: {e}")))?;

        let model = ActiveModel {
            paper_id: Set(paper_id),
            reviewer_id: Set(reviewer_id),
            comments: Set(req.comments),
            insights: Set(insights_json),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Reviews::insert(model)
            .on_conflict(
                OnConflict::columns([Column::PaperId, Column::ReviewerId])
                    .update_columns([Column::Comments, Column::Insights, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("提交评审失败: {e}")))?;

        // 按唯一键回查，拿到插入或更新后的完整记录
        let result = Reviews::find()
            .filter(Column::PaperId.eq(paper_id))
            .filter(Column::ReviewerId.eq(reviewer_id))
            .one(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("回查评审失败: {e}")))?
            .ok_or_else(|| ConfSysError::database_operation("评审写入后未找到记录"))?;

        Ok(result.into_review())
    }

    /// 列出论文的全部评审，附带评审人公开信息
    pub async fn list_reviews_for_paper_impl(
        &self,
        paper_id: i64,
    ) -> Result<Vec<ReviewWithReviewer>> {
        let models = Reviews::find()
            .filter(Column::PaperId.eq(paper_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询评审列表失败: {e}")))?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        let reviewer_ids: Vec<i64> = models.iter().map(|m| m.reviewer_id).collect();
        let reviewers: HashMap<i64, ReviewerInfo> = users::Entity::find()
            .filter(users::Column::Id.is_in(reviewer_ids))
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询评审人失败: {e}")))?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    ReviewerInfo {
                        id: u.id,
                        name: u.name,
                        email: u.email,
                    },
                )
            })
            .collect();

        Ok(models
            .into_iter()
            .map(|m| {
                let reviewer = reviewers.get(&m.reviewer_id).cloned();
                ReviewWithReviewer {
                    review: m.into_review(),
                    reviewer,
                }
            })
            .collect())
    }

    /// 统计评审数量
    pub async fn count_reviews_impl(&self) -> Result<u64> {
        let count = Reviews::find()
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计评审数量失败: {e}")))?;

        Ok(count)
    }

    /// 统计活动下论文收到的评审数量
    pub async fn count_reviews_for_event_impl(&self, event_id: i64) -> Result<u64> {
        let paper_ids: Vec<i64> = papers::Entity::find()
            .select_only()
            .column(papers::Column::Id)
            .filter(papers::Column::EventId.eq(event_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询活动论文失败: {e}")))?;

        if paper_ids.is_empty() {
            return Ok(0);
        }

        let count = Reviews::find()
            .filter(Column::PaperId.is_in(paper_ids))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计活动评审失败: {e}")))?;

        Ok(count)
    }

    /// 统计评审人提交的评审数量
    pub async fn count_reviews_by_reviewer_impl(&self, reviewer_id: i64) -> Result<u64> {
        let count = Reviews::find()
            .filter(Column::ReviewerId.eq(reviewer_id))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计评审人评审失败: {e}")))?;

        Ok(count)
    }
}
