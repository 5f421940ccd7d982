use super::SeaOrmStorage;
use crate::entity::papers::{ActiveModel, Column, Entity as Papers};
use crate::entity::{events, users};
use crate::errors::{ConfSysError, Result};
use crate::models::admin::responses::{PaperStatusCounts, TrackCount};
use crate::models::papers::{
    entities::{Paper, PaperStatus},
    requests::CreatePaperRequest,
    responses::{PaperAuthor, PaperDetail},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建论文，初始状态为 submitted
    pub async fn create_paper_impl(&self, req: CreatePaperRequest) -> Result<Paper> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            track: Set(req.track),
            event_id: Set(req.event_id),
            file_url: Set(req.file_url),
            author_id: Set(req.author_id),
            status: Set(PaperStatus::Submitted.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("创建论文失败: {e}")))?;

        Ok(result.into_paper())
    }

    /// 通过 ID 获取论文
    pub async fn get_paper_by_id_impl(&self, id: i64) -> Result<Option<Paper>> {
        let result = Papers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询论文失败: {e}")))?;

        Ok(result.map(|m| m.into_paper()))
    }

    /// 通过 ID 获取论文及关联信息
    pub async fn get_paper_detail_impl(&self, id: i64) -> Result<Option<PaperDetail>> {
        let model = Papers::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询论文失败: {e}")))?;

        match model {
            Some(model) => {
                let mut details = self.attach_paper_details(vec![model]).await?;
                Ok(details.pop())
            }
            None => Ok(None),
        }
    }

    /// 列出作者的全部投稿，按提交时间倒序
    pub async fn list_papers_by_author_impl(&self, author_id: i64) -> Result<Vec<PaperDetail>> {
        let models = Papers::find()
            .filter(Column::AuthorId.eq(author_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询投稿列表失败: {e}")))?;

        self.attach_paper_details(models).await
    }

    /// 列出活动下的论文，可按状态过滤
    pub async fn list_papers_by_event_impl(
        &self,
        event_id: i64,
        status: Option<PaperStatus>,
    ) -> Result<Vec<PaperDetail>> {
        let mut select = Papers::find().filter(Column::EventId.eq(event_id));

        if let Some(status) = status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        let models = select
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询活动论文失败: {e}")))?;

        self.attach_paper_details(models).await
    }

    /// 原子状态迁移：仅当当前状态等于 from 时更新为 to
    ///
    /// 通过带状态条件的 update 实现 CAS，并发下最多一个调用方成功。
    pub async fn update_paper_status_cas_impl(
        &self,
        paper_id: i64,
        from: PaperStatus,
        to: PaperStatus,
    ) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Papers::update_many()
            .col_expr(Column::Status, sea_orm::sea_query::Expr::value(to.to_string()))
            .col_expr(Column::UpdatedAt, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(paper_id))
            .filter(Column::Status.eq(from.to_string()))
            .exec(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("更新论文状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出最近提交的论文
    pub async fn list_recent_papers_impl(&self, limit: u64) -> Result<Vec<PaperDetail>> {
        let models = Papers::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询最近论文失败: {e}")))?;

        self.attach_paper_details(models).await
    }

    /// 统计论文数量
    pub async fn count_papers_impl(&self) -> Result<u64> {
        let count = Papers::find()
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计论文数量失败: {e}")))?;

        Ok(count)
    }

    /// 活动下按状态统计论文数量
    ///
    /// pending 为未进入终态且未被接收/拒绝的论文数，
    /// 由 total - selected - rejected 得出，保证四个数字自洽。
    pub async fn count_event_papers_by_status_impl(
        &self,
        event_id: i64,
    ) -> Result<PaperStatusCounts> {
        let total = Papers::find()
            .filter(Column::EventId.eq(event_id))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计论文数量失败: {e}")))?
            as i64;

        let selected = Papers::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::Status.eq(PaperStatus::Accepted.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计接收论文失败: {e}")))?
            as i64;

        let rejected = Papers::find()
            .filter(Column::EventId.eq(event_id))
            .filter(Column::Status.eq(PaperStatus::Rejected.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计拒绝论文失败: {e}")))?
            as i64;

        Ok(PaperStatusCounts {
            total,
            selected,
            rejected,
            pending: total - selected - rejected,
        })
    }

    /// 活动下按赛道统计论文数量
    pub async fn track_breakdown_for_event_impl(&self, event_id: i64) -> Result<Vec<TrackCount>> {
        let rows: Vec<(String, i64)> = Papers::find()
            .select_only()
            .column(Column::Track)
            .column_as(Column::Id.count(), "count")
            .filter(Column::EventId.eq(event_id))
            .group_by(Column::Track)
            .order_by_asc(Column::Track)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计赛道分布失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(track, count)| TrackCount { track, count })
            .collect())
    }

    /// 批量补齐论文的作者与活动信息
    pub(crate) async fn attach_paper_details(
        &self,
        models: Vec<crate::entity::papers::Model>,
    ) -> Result<Vec<PaperDetail>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<i64> = models.iter().map(|m| m.author_id).collect();
        let event_ids: Vec<i64> = models.iter().filter_map(|m| m.event_id).collect();

        let authors: HashMap<i64, PaperAuthor> = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询论文作者失败: {e}")))?
            .into_iter()
            .map(|u| {
                (
                    u.id,
                    PaperAuthor {
                        id: u.id,
                        name: u.name,
                        email: u.email,
                        contact_number: u.contact_number,
                    },
                )
            })
            .collect();

        let event_titles: HashMap<i64, String> = if event_ids.is_empty() {
            HashMap::new()
        } else {
            events::Entity::find()
                .filter(events::Column::Id.is_in(event_ids))
                .all(&self.db)
                .await
                .map_err(|e| ConfSysError::database_operation(format!("查询论文活动失败: {e}")))?
                .into_iter()
                .map(|e| (e.id, e.title))
                .collect()
        };

        Ok(models
            .into_iter()
            .map(|m| {
                let author = authors.get(&m.author_id).cloned();
                let event_title = m.event_id.and_then(|id| event_titles.get(&id).cloned());
                PaperDetail {
                    paper: m.into_paper(),
                    author,
                    event_title,
                }
            })
            .collect())
    }
}
