use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::papers::entities::PaperStatus;
use crate::models::{ApiResponse, ErrorCode};

// 活动下已接收的论文
pub async fn handle_list_accepted(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_event_by_id(event_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::NotFound, "活动不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询活动失败: {e}"),
                )),
            );
        }
    }

    match storage
        .list_papers_by_event(event_id, Some(PaperStatus::Accepted))
        .await
    {
        Ok(papers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            papers,
            "Accepted papers retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询论文失败: {e}"),
            )),
        ),
    }
}
