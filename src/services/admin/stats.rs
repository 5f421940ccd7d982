use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::admin::responses::{AdminStatsResponse, GlobalSummary};
use crate::models::{ApiResponse, ErrorCode};

const RECENT_LIMIT: u64 = 5;

// 全局统计概览：总量计数 + 最近活动/投稿
pub async fn handle_get_stats(
    service: &AdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let result: crate::errors::Result<AdminStatsResponse> = async {
        let total_users = storage.count_users().await? as i64;
        let total_events = storage.count_events().await? as i64;
        let total_papers = storage.count_papers().await? as i64;
        let total_reviews = storage.count_reviews().await? as i64;

        let recent_events = storage.list_recent_events(RECENT_LIMIT).await?;
        let recent_papers = storage.list_recent_papers(RECENT_LIMIT).await?;

        Ok(AdminStatsResponse {
            summary: GlobalSummary {
                total_users,
                total_events,
                total_papers,
                total_reviews,
            },
            recent_events,
            recent_papers,
        })
    }
    .await;

    match result {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Stats retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询统计失败: {e}"),
            )),
        ),
    }
}
