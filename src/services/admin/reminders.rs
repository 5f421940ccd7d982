use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::admin::responses::ReviewerReminder;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

// 审稿人催审列表：每位审稿人及其累计评审数
pub async fn handle_get_reviewer_reminders(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<Vec<ReviewerReminder>> = async {
        let reviewers = storage.list_users_by_role(UserRole::Reviewer).await?;

        let mut reminders = Vec::with_capacity(reviewers.len());
        for reviewer in reviewers {
            let total_reviews = storage.count_reviews_by_reviewer(reviewer.id).await? as i64;
            reminders.push(ReviewerReminder {
                name: reviewer.name,
                email: reviewer.email,
                total_reviews,
            });
        }
        Ok(reminders)
    }
    .await;

    match result {
        Ok(reminders) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reminders,
            "Reviewer reminders retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询审稿人列表失败: {e}"),
            )),
        ),
    }
}
