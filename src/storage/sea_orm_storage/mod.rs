//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod events;
mod papers;
mod reviews;
mod users;

#[cfg(test)]
pub(crate) mod test_support;
#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{ConfSysError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ConfSysError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ConfSysError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ConfSysError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ConfSysError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 活动模块
    async fn create_event(&self, event: CreateEventRequest) -> Result<Event> {
        self.create_event_impl(event).await
    }

    async fn get_event_by_id(&self, id: i64) -> Result<Option<Event>> {
        self.get_event_by_id_impl(id).await
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.list_events_impl().await
    }

    async fn list_recent_events(&self, limit: u64) -> Result<Vec<Event>> {
        self.list_recent_events_impl(limit).await
    }

    async fn count_events(&self) -> Result<u64> {
        self.count_events_impl().await
    }

    // 论文模块
    async fn create_paper(&self, paper: CreatePaperRequest) -> Result<Paper> {
        self.create_paper_impl(paper).await
    }

    async fn get_paper_by_id(&self, id: i64) -> Result<Option<Paper>> {
        self.get_paper_by_id_impl(id).await
    }

    async fn get_paper_detail(&self, id: i64) -> Result<Option<PaperDetail>> {
        self.get_paper_detail_impl(id).await
    }

    async fn list_papers_by_author(&self, author_id: i64) -> Result<Vec<PaperDetail>> {
        self.list_papers_by_author_impl(author_id).await
    }

    async fn list_papers_by_event(
        &self,
        event_id: i64,
        status: Option<PaperStatus>,
    ) -> Result<Vec<PaperDetail>> {
        self.list_papers_by_event_impl(event_id, status).await
    }

    async fn update_paper_status_cas(
        &self,
        paper_id: i64,
        from: PaperStatus,
        to: PaperStatus,
    ) -> Result<bool> {
        self.update_paper_status_cas_impl(paper_id, from, to).await
    }

    async fn list_recent_papers(&self, limit: u64) -> Result<Vec<PaperDetail>> {
        self.list_recent_papers_impl(limit).await
    }

    async fn count_papers(&self) -> Result<u64> {
        self.count_papers_impl().await
    }

    async fn count_event_papers_by_status(&self, event_id: i64) -> Result<PaperStatusCounts> {
        self.count_event_papers_by_status_impl(event_id).await
    }

    async fn track_breakdown_for_event(&self, event_id: i64) -> Result<Vec<TrackCount>> {
        self.track_breakdown_for_event_impl(event_id).await
    }

    // 评审模块
    async fn upsert_review(
        &self,
        paper_id: i64,
        reviewer_id: i64,
        review: SubmitReviewRequest,
    ) -> Result<Review> {
        self.upsert_review_impl(paper_id, reviewer_id, review).await
    }

    async fn list_reviews_for_paper(&self, paper_id: i64) -> Result<Vec<ReviewWithReviewer>> {
        self.list_reviews_for_paper_impl(paper_id).await
    }

    async fn count_reviews(&self) -> Result<u64> {
        self.count_reviews_impl().await
    }

    async fn count_reviews_for_event(&self, event_id: i64) -> Result<u64> {
        self.count_reviews_for_event_impl(event_id).await
    }

    async fn count_reviews_by_reviewer(&self, reviewer_id: i64) -> Result<u64> {
        self.count_reviews_by_reviewer_impl(reviewer_id).await
    }

    // 审稿指派模块
    async fn create_assignment(
        &self,
        event_id: i64,
        reviewer_id: i64,
        paper_id: i64,
    ) -> Result<bool> {
        self.create_assignment_impl(event_id, reviewer_id, paper_id)
            .await
    }

    async fn assignment_exists(&self, paper_id: i64, reviewer_id: i64) -> Result<bool> {
        self.assignment_exists_impl(paper_id, reviewer_id).await
    }

    async fn list_assignments_for_event(&self, event_id: i64) -> Result<Vec<AssignmentListItem>> {
        self.list_assignments_for_event_impl(event_id).await
    }

    async fn list_assigned_papers(&self, reviewer_id: i64) -> Result<Vec<AssignedPaper>> {
        self.list_assigned_papers_impl(reviewer_id).await
    }

    async fn count_assignments_for_event(&self, event_id: i64) -> Result<u64> {
        self.count_assignments_for_event_impl(event_id).await
    }

    async fn count_distinct_reviewers_for_event(&self, event_id: i64) -> Result<u64> {
        self.count_distinct_reviewers_for_event_impl(event_id).await
    }
}
