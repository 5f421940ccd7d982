use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{ConfSysError, Result};
use crate::models::users::{
    entities::{User, UserRole},
    requests::CreateUserRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    SqlErr,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            email: Set(req.email),
            password_hash: Set(req.password),
            roles: Set(UserRole::join_role_set(&req.roles)),
            contact_number: Set(req.contact_number),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            // email 上有唯一索引，冲突单独上报，调用方映射为 409
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    ConfSysError::conflict("Email already exists")
                }
                _ => ConfSysError::database_operation(format!("创建用户失败: {e}")),
            }
        })?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 列出持有指定角色的用户
    ///
    /// 角色以逗号分隔存储，LIKE 匹配后再在内存中精确过滤，
    /// 避免 "reviewer" 误匹配到其它包含该子串的值。
    pub async fn list_users_by_role_impl(&self, role: UserRole) -> Result<Vec<User>> {
        let result = Users::find()
            .filter(Column::Roles.contains(role.to_string()))
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("查询用户列表失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| m.into_user())
            .filter(|u| u.has_role(&role))
            .collect())
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| ConfSysError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }
}
