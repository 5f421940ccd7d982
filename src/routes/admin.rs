use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::users::entities::UserRole;
use crate::services::AdminService;
use crate::utils::SafeEventIdI64;

// 懒加载的全局 AdminService 实例
static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

// 全局统计概览
pub async fn get_stats(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.get_stats(&req).await
}

// 单个活动的统计报表
pub async fn get_event_stats(req: HttpRequest, path: SafeEventIdI64) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.get_event_stats(&req, path.0).await
}

// 审稿人催审列表
pub async fn get_reviewer_reminders(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.get_reviewer_reminders(&req).await
}
// 配置路由
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(middlewares::RequireRole::new_any(
                UserRole::coordinator_roles(),
            ))
            .wrap(middlewares::RequireJWT)
            .route("/stats", web::get().to(get_stats))
            .route("/stats/event/{event_id}", web::get().to(get_event_stats))
            .route(
                "/reviewers/reminders",
                web::get().to(get_reviewer_reminders),
            ),
    );
}
