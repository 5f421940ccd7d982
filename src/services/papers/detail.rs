use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::PaperService;
use crate::models::{ApiResponse, ErrorCode};

// 论文详情。任何已登录用户可见（登录由路由层中间件保证）。
pub async fn handle_get_paper(
    service: &PaperService,
    request: &HttpRequest,
    paper_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_paper_detail(paper_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Paper retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::NotFound, "论文不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询论文失败: {e}"),
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

    // 详情接口对任意已登录用户开放，未被指派的审稿人同样可见
    #[actix_web::test]
    async fn test_any_authenticated_user_can_view_paper() {
        let storage = test_support::memory_storage().await;
        let author =
            test_support::seed_user(&storage, "author@example.com", vec![UserRole::Author]).await;
        let paper = test_support::seed_paper(&storage, author.id, None).await;

        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();

        let service = PaperService::new_lazy();
        let response = handle_get_paper(&service, &request, paper.id).await.unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_get_paper_unknown_id_returns_not_found() {
        let storage = test_support::memory_storage().await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage))
            .to_http_request();

        let service = PaperService::new_lazy();
        let response = handle_get_paper(&service, &request, 9999).await.unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
