use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::papers::requests::TransitionStatusRequest;
use crate::models::users::entities::UserRole;
use crate::services::PaperService;
use crate::utils::SafePaperIdI64;

// 懒加载的全局 PaperService 实例
static PAPER_SERVICE: Lazy<PaperService> = Lazy::new(PaperService::new_lazy);

// 投稿
pub async fn upload_paper(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.upload_paper(&req, payload).await
}

// 当前用户的投稿列表
pub async fn list_my_papers(req: HttpRequest) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.list_my_papers(&req).await
}

// 论文详情
pub async fn get_paper(req: HttpRequest, path: SafePaperIdI64) -> ActixResult<HttpResponse> {
    PAPER_SERVICE.get_paper(&req, path.0).await
}

// 论文状态迁移
pub async fn transition_status(
    req: HttpRequest,
    path: SafePaperIdI64,
    body: web::Json<TransitionStatusRequest>,
) -> ActixResult<HttpResponse> {
    PAPER_SERVICE
        .transition_status(&req, path.0, body.into_inner())
        .await
}
// 配置路由
pub fn configure_papers_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/paper")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/upload")
                    .wrap(RateLimit::file_upload())
                    .route(
                        web::post()
                            .to(upload_paper)
                            .wrap(middlewares::RequireRole::new_any(UserRole::author_roles())),
                    ),
            )
            .service(
                web::resource("/my").route(
                    web::get()
                        .to(list_my_papers)
                        .wrap(middlewares::RequireRole::new_any(UserRole::author_roles())),
                ),
            )
            .service(
                web::resource("/{paper_id}")
                    // 任意已登录用户可查看
                    .route(web::get().to(get_paper)),
            )
            .service(
                web::resource("/{paper_id}/status").route(
                    web::post()
                        .to(transition_status)
                        // 状态机对协调员专属状态另有校验
                        .wrap(middlewares::RequireRole::new_any(UserRole::reviewer_roles())),
                ),
            ),
    );
}
