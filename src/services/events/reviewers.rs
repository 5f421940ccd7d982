use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::users::{entities::UserRole, responses::ReviewerListResponse};
use crate::models::{ApiResponse, ErrorCode};

// 可指派的审稿人列表（持有 reviewer 角色的用户，按姓名升序）
pub async fn handle_list_reviewers(
    service: &EventService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_users_by_role(UserRole::Reviewer).await {
        Ok(reviewers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ReviewerListResponse { reviewers },
            "Reviewers retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询审稿人失败: {e}"),
            )),
        ),
    }
}
