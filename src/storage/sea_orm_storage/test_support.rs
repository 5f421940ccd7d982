//! 存储层测试辅助：内存 SQLite 实例与种子数据

use super::SeaOrmStorage;
use crate::models::events::{entities::Event, requests::CreateEventRequest};
use crate::models::papers::{entities::Paper, requests::CreatePaperRequest};
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use migration::{Migrator, MigratorTrait};

pub(crate) async fn memory_storage() -> SeaOrmStorage {
    // 内存库绑定在连接上，连接池必须收敛到单连接
    let mut opt = sea_orm::ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1);
    let db = sea_orm::Database::connect(opt)
        .await
        .expect("connect in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    SeaOrmStorage { db }
}

pub(crate) async fn seed_user(storage: &SeaOrmStorage, email: &str, roles: Vec<UserRole>) -> User {
    storage
        .create_user_impl(CreateUserRequest {
            name: email.split('@').next().unwrap_or("user").to_string(),
            email: email.to_string(),
            password: "hashed-password".to_string(),
            roles,
            contact_number: None,
        })
        .await
        .expect("seed user")
}

pub(crate) async fn seed_event(storage: &SeaOrmStorage, created_by: i64) -> Event {
    storage
        .create_event_impl(CreateEventRequest {
            title: "ICSE 2026".to_string(),
            description: Some("Software engineering conference".to_string()),
            date: chrono::Utc::now(),
            banner_url: None,
            created_by,
        })
        .await
        .expect("seed event")
}

pub(crate) async fn seed_paper(
    storage: &SeaOrmStorage,
    author_id: i64,
    event_id: Option<i64>,
) -> Paper {
    storage
        .create_paper_impl(CreatePaperRequest {
            title: "Review Triage at Scale".to_string(),
            track: "AI/ML".to_string(),
            event_id,
            file_url: "/uploads/papers/test.pdf".to_string(),
            author_id,
        })
        .await
        .expect("seed paper")
}
