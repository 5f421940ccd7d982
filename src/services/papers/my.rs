use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaperService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};

// 当前用户的投稿列表，按提交时间倒序
pub async fn handle_list_my_papers(
    service: &PaperService,
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

    match storage.list_papers_by_author(user_id).await {
        Ok(papers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            papers,
            "Papers retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询投稿失败: {e}"),
            )),
        ),
    }
}
