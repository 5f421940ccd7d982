use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::{ApiResponse, ErrorCode};

// 列出全部活动，按活动日期升序
pub async fn handle_list_events(
    service: &EventService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_events().await {
        Ok(events) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            events,
            "Events retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询活动失败: {e}"),
            )),
        ),
    }
}
