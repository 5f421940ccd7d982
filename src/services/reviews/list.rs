use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ReviewService;
use crate::models::{ApiResponse, ErrorCode};

// 论文的评审列表。任何已登录用户可见（登录由路由层中间件保证）。
pub async fn handle_list_reviews(
    service: &ReviewService,
    request: &HttpRequest,
    paper_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_paper_by_id(paper_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.list_reviews_for_paper(paper_id).await {
        Ok(reviews) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            reviews,
            "Reviews retrieved successfully",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评审失败: {e}"),
            )),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;
    use crate::storage::sea_orm_storage::test_support;
    use crate::storage::Storage;
    use actix_web::{test, web};
    use std::sync::Arc;

    // 评审列表对任意已登录用户开放，不限作者或协调员
    #[actix_web::test]
    async fn test_any_authenticated_user_can_list_reviews() {
        let storage = test_support::memory_storage().await;
        let author =
            test_support::seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
        let paper = test_support::seed_paper(&storage, author.id, None).await;

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();

        let service = ReviewService::new_lazy();
        let response = handle_list_reviews(&service, &request, paper.id)
            .await
            .unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_list_reviews_unknown_paper_returns_not_found() {
        let storage = test_support::memory_storage().await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();

        let service = ReviewService::new_lazy();
        let response = handle_list_reviews(&service, &request, 9999).await.unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
