use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, middleware, web};
use once_cell::sync::Lazy;

use crate::services::UploadService;

// 懒加载的全局 UploadService 实例
static UPLOAD_SERVICE: Lazy<UploadService> = Lazy::new(UploadService::new_lazy);

pub async fn serve_file(
    request: HttpRequest,
    path: web::Path<(String, String)>,
) -> ActixResult<HttpResponse> {
    let (category, filename) = path.into_inner();
    UPLOAD_SERVICE.serve_file(&request, category, filename).await
}
// 配置路由
//
// 横幅图片要在 <img> 标签里直接引用，论文链接要能在新标签页打开，
// 因此这里不做鉴权，文件名本身带有不可猜测的 UUID。
pub fn configure_uploads_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/uploads")
            .wrap(middleware::Compress::default())
            .route("/{category}/{filename}", web::get().to(serve_file)),
    );
}
