use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EventService;
use crate::models::assignments::responses::AssignResult;
use crate::models::events::requests::AssignReviewerRequest;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

// 将一名审稿人指派给一批论文。
// 已存在的 (paper, reviewer) 配对静默跳过并记入 duplicates；
// 若全部为重复则整体返回 409。
pub async fn handle_assign_reviewer(
    service: &EventService,
    request: &HttpRequest,
    event_id: i64,
    body: AssignReviewerRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if body.paper_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParams,
            "paperIds must not be empty",
        )));
    }

    // 1. 活动必须存在
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

    // 2. 审稿人必须存在且持有 reviewer 角色
    match storage.get_user_by_id(body.reviewer_id).await {
        Ok(Some(user)) => {
            if !user.has_role(&UserRole::Reviewer) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParams,
                    "User is not a reviewer",
                )));
            }
        }
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "审稿人不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询审稿人失败: {e}"),
                )),
            );
        }
    }

    // 3. 每篇论文必须存在且属于该活动
    for paper_id in &body.paper_ids {
        match storage.get_paper_by_id(*paper_id).await {
            Ok(Some(paper)) => {
                // 不属于该活动的论文视为在该活动下不存在
                if paper.event_id != Some(event_id) {
                    return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                        ErrorCode::NotFound,
                        format!("Paper {paper_id} does not belong to this event"),
                    )));
                }
            }
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::NotFound,
                    format!("论文 {paper_id} 不存在"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询论文失败: {e}"),
                    )),
                );
            }
        }
    }

    // 4. 逐篇写入，唯一约束冲突即为重复指派
    let mut assigned = Vec::new();
    let mut duplicates = Vec::new();

    for paper_id in &body.paper_ids {
        match storage
            .create_assignment(event_id, body.reviewer_id, *paper_id)
            .await
        {
            Ok(true) => assigned.push(*paper_id),
            Ok(false) => duplicates.push(*paper_id),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("创建指派失败: {e}"),
                    )),
                );
            }
        }
    }

    let result = AssignResult {
        assigned,
        duplicates,
    };

    if result.assigned.is_empty() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error(
            ErrorCode::DuplicateAssignment,
            result,
            "Reviewer is already assigned to all of these papers",
        )));
    }

    tracing::info!(
        "Reviewer {} assigned to {} paper(s) in event {} ({} duplicate(s) skipped)",
        body.reviewer_id,
        result.assigned.len(),
        event_id,
        result.duplicates.len()
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(result, "Reviewer assigned successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::test_support;
    use actix_web::{test, web};
    use std::sync::Arc;

    // 属于其它活动的论文在本活动下视为不存在
    #[actix_web::test]
    async fn test_assign_paper_from_other_event_is_not_found() {
        let storage = test_support::memory_storage().await;
        let coordinator = test_support::seed_user(
            &storage,
            "coordinator@example.com",
            vec![UserRole::Coordinator],
        )
        .await;
        let reviewer =
            test_support::seed_user(&storage, "reviewer@example.com", vec![UserRole::Reviewer])
                .await;
        let author =
            test_support::seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
        let event_a = test_support::seed_event(&storage, coordinator.id).await;
        let event_b = test_support::seed_event(&storage, coordinator.id).await;
        let paper = test_support::seed_paper(&storage, author.id, Some(event_b.id)).await;

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();

        let service = EventService::new_lazy();
        let body = AssignReviewerRequest {
            reviewer_id: reviewer.id,
            paper_ids: vec![paper.id],
        };
        let response = handle_assign_reviewer(&service, &request, event_a.id, body)
            .await
            .unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
