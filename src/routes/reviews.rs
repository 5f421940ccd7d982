use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::reviews::requests::SubmitReviewRequest;
use crate::models::users::entities::UserRole;
use crate::services::ReviewService;
use crate::utils::SafePaperIdI64;

// 懒加载的全局 ReviewService 实例
static REVIEW_SERVICE: Lazy<ReviewService> = Lazy::new(ReviewService::new_lazy);

// 当前审稿人的审稿队列
pub async fn list_assigned_papers(req: HttpRequest) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_assigned_papers(&req).await
}

// 提交/更新评审
pub async fn submit_review(
    req: HttpRequest,
    path: SafePaperIdI64,
    body: web::Json<SubmitReviewRequest>,
) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE
        .submit_review(&req, path.0, body.into_inner())
        .await
}

// 论文的评审列表
pub async fn list_reviews(req: HttpRequest, path: SafePaperIdI64) -> ActixResult<HttpResponse> {
    REVIEW_SERVICE.list_reviews(&req, path.0).await
}
// 配置路由
pub fn configure_reviews_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/review")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/assigned").route(
                    web::get()
                        .to(list_assigned_papers)
                        .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles())),
                ),
            )
            .service(
                web::resource("/{paper_id}")
                    // 任意已登录用户可查看
                    .route(web::get().to(list_reviews))
                    .route(
                        web::post()
                            .to(submit_review)
                            .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles())),
                    ),
            ),
    );
}
