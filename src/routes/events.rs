use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::events::requests::AssignReviewerRequest;
use crate::models::users::entities::UserRole;
use crate::services::EventService;
use crate::utils::SafeEventIdI64;

// 懒加载的全局 EventService 实例
static EVENT_SERVICE: Lazy<EventService> = Lazy::new(EventService::new_lazy);

// 列出全部活动（公开）
pub async fn list_events(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_events(&req).await
}

// 创建活动
pub async fn create_event(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.create_event(&req, payload).await
}

// 活动下的全部投稿
pub async fn list_submissions(req: HttpRequest, path: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_submissions(&req, path.0).await
}

// 可指派的审稿人列表
pub async fn list_reviewers(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_reviewers(&req).await
}

// 指派审稿人
pub async fn assign_reviewer(
    req: HttpRequest,
    path: SafeEventIdI64,
    body: web::Json<AssignReviewerRequest>,
) -> ActixResult<HttpResponse> {
    EVENT_SERVICE
        .assign_reviewer(&req, path.0, body.into_inner())
        .await
}

// 活动下的指派列表
pub async fn list_assignments(req: HttpRequest, path: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_assignments(&req, path.0).await
}

// 活动下已接收的论文
pub async fn list_accepted(req: HttpRequest, path: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.list_accepted(&req, path.0).await
}

// 导出已接收论文的 XLSX 报表
pub async fn export_accepted(req: HttpRequest, path: SafeEventIdI64) -> ActixResult<HttpResponse> {
    EVENT_SERVICE.export_accepted(&req, path.0).await
}
// 配置路由
pub fn configure_events_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/events")
            // 活动列表公开可见
            .route("", web::get().to(list_events))
            // 其余操作仅协调员
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(
                        UserRole::coordinator_roles(),
                    ))
                    .wrap(middlewares::RequireJWT)
                    .service(
                        web::resource("/create")
                            .wrap(RateLimit::file_upload())
                            .route(web::post().to(create_event)),
                    )
                    .route("/reviewers/all", web::get().to(list_reviewers))
                    .route(
                        "/{event_id}/submissions",
                        web::get().to(list_submissions),
                    )
                    .route("/{event_id}/assign", web::post().to(assign_reviewer))
                    .route(
                        "/{event_id}/assignments",
                        web::get().to(list_assignments),
                    )
                    .route("/{event_id}/accepted", web::get().to(list_accepted))
                    .route(
                        "/{event_id}/accepted.xlsx",
                        web::get().to(export_accepted),
                    ),
            ),
    );
}
