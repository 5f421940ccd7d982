use super::SeaOrmStorage;
use crate::entity::events::{ActiveModel, Column, Entity as Events};
use crate::errors::{ConfSysError, Result};
use crate::models::events::{entities::Event, requests::CreateEventRequest};
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    /// 创建活动
    pub async fn create_event_impl(&self, req: CreateEventRequest) -> Result<Event> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            date: Set(req.date.timestamp()),
            banner_url: Set(req.banner_url),
            created_by: Set(req.created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("创建活动失败: {e}")))?;

        Ok(result.into_event())
    }

    /// 通过 ID 获取活动
    pub async fn get_event_by_id_impl(&self, id: i64) -> Result<Option<Event>> {
        let result = Events::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询活动失败: {e}")))?;

        Ok(result.map(|m| m.into_event()))
    }

    /// 列出全部活动，按活动日期升序
    pub async fn list_events_impl(&self) -> Result<Vec<Event>> {
        let result = Events::find()
            .order_by_asc(Column::Date)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询活动列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_event()).collect())
    }

    /// 列出最近创建的活动
    pub async fn list_recent_events_impl(&self, limit: u64) -> Result<Vec<Event>> {
        let result = Events::find()
            .order_by_desc(Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询最近活动失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_event()).collect())
    }

    /// 统计活动数量
    pub async fn count_events_impl(&self) -> Result<u64> {
        let count = Events::find()
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计活动数量失败: {e}")))?;

        Ok(count)
    }
}
