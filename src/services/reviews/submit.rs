use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::middlewares::RequireJWT;
use crate::models::papers::entities::PaperStatus;
use crate::models::reviews::requests::SubmitReviewRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_non_blank;

// 提交评审。每个 (paper, reviewer) 至多一条评审记录，重复提交覆盖旧内容。
// 对 submitted 状态论文的首条评审会把论文推进到 under_review。
pub async fn handle_submit_review(
    service: &ReviewService,
    request: &HttpRequest,
    paper_id: i64,
    body: SubmitReviewRequest,
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

    if let Err(msg) = validate_non_blank(&body.comments, "comments") {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }

    let paper = match storage.get_paper_by_id(paper_id).await {
        Ok(Some(paper)) => paper,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::NotFound, "论文不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询论文失败: {e}"),
                )),
            );
        }
    };

    // 只有被指派的审稿人可以评审
    match storage.assignment_exists(paper_id, user_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ReviewNotAllowed,
                "You are not assigned to this paper",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询指派失败: {e}"),
                )),
            );
        }
    }

    // 终态或待修改的论文不接受评审
    if !paper.status.available_for_review() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ReviewNotAllowed,
            format!("Paper in status '{}' cannot be reviewed", paper.status),
        )));
    }

    let review = match storage.upsert_review(paper_id, user_id, body).await {
        Ok(review) => review,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("保存评审失败: {e}"),
                )),
            );
        }
    };

    // 首条评审把 submitted 推进到 under_review。
    // CAS 未命中说明已被并发推进，忽略即可。
    if paper.status == PaperStatus::Submitted
        && let Err(e) = storage
            .update_paper_status_cas(paper_id, PaperStatus::Submitted, PaperStatus::UnderReview)
            .await
    {
        tracing::warn!("Failed to advance paper {} to under_review: {}", paper_id, e);
    }

    tracing::info!("Review saved for paper {} by reviewer {}", paper_id, user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::success(review, "Review saved successfully")))
}
