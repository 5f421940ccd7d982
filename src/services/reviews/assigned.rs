use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

// 当前审稿人的审稿队列，按指派时间排列，附 reviewed 标记
pub async fn handle_list_assigned_papers(
    service: &ReviewService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    match storage.list_assigned_papers(user_id).await {
        Ok(papers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            papers,
            "Assigned papers retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询审稿队列失败: {e}"),
            )),
        ),
    }
}
