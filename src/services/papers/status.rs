use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaperService;
use crate::middlewares::RequireJWT;
use crate::models::papers::requests::TransitionStatusRequest;
use crate::models::{ApiResponse, ErrorCode};

// 论文状态迁移。
// 先校验状态机边与执行者角色，再以 CAS（当前状态作为条件）写入，
// 并发竞争导致的写失败返回 409。
pub async fn handle_transition_status(
    service: &PaperService,
    request: &HttpRequest,
    paper_id: i64,
    body: TransitionStatusRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let roles = match RequireJWT::extract_user_roles(request) {
        Some(roles) => roles,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

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

    if let Err(msg) = paper.status.validate_transition(&body.status, &roles) {
        let code = if body.status.requires_coordinator() && paper.status.can_transition_to(&body.status) {
            ErrorCode::PermissionDenied
        } else {
            ErrorCode::InvalidStatusTransition
        };
        let response = match code {
            ErrorCode::PermissionDenied => {
                HttpResponse::Forbidden().json(ApiResponse::error_empty(code, msg))
            }
            _ => HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg)),
        };
        return Ok(response);
    }

    match storage
        .update_paper_status_cas(paper_id, paper.status, body.status)
        .await
    {
        Ok(true) => {
            tracing::info!(
                "Paper {} status changed: {} -> {}",
                paper_id,
                paper.status,
                body.status
            );
            match storage.get_paper_by_id(paper_id).await {
                Ok(Some(updated)) => Ok(HttpResponse::Ok()
                    .json(ApiResponse::success(updated, "Status updated successfully"))),
                Ok(None) => Ok(HttpResponse::NotFound()
                    .json(ApiResponse::error_empty(ErrorCode::NotFound, "论文不存在"))),
                Err(e) => Ok(HttpResponse::InternalServerError().json(
                    ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询论文失败: {e}"),
                    ),
                )),
            }
        }
        // 条件写未命中，说明状态已被并发修改
        Ok(false) => Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::InvalidStatusTransition,
            "Paper status has changed, please refresh and retry",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新状态失败: {e}"),
            )),
        ),
    }
}
