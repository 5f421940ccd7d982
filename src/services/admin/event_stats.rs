use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AdminService;
use crate::models::admin::responses::{AssignmentCounts, EventStatsResponse, ReviewCounts};
use crate::models::{ApiResponse, ErrorCode};

// 单个活动的统计报表：论文状态分布、评审数、指派数与主题方向分布
pub async fn handle_get_event_stats(
    service: &AdminService,
    request: &HttpRequest,
    event_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let event = match storage.get_event_by_id(event_id).await {
        Ok(Some(event)) => event,
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
    };

    let result: crate::errors::Result<EventStatsResponse> = async {
        let papers = storage.count_event_papers_by_status(event_id).await?;
        let review_total = storage.count_reviews_for_event(event_id).await? as i64;
        let assignment_total = storage.count_assignments_for_event(event_id).await? as i64;
        let reviewers_assigned = storage.count_distinct_reviewers_for_event(event_id).await? as i64;
        let track_breakdown = storage.track_breakdown_for_event(event_id).await?;

        Ok(EventStatsResponse {
            event: event.title,
            papers,
            reviews: ReviewCounts {
                total: review_total,
            },
            assignments: AssignmentCounts {
                total: assignment_total,
                reviewers_assigned,
            },
            track_breakdown,
        })
    }
    .await;

    match result {
        Ok(stats) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            stats,
            "Event stats retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询活动统计失败: {e}"),
            )),
        ),
    }
}
