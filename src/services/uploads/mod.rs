pub mod serve;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct UploadService;

impl UploadService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 读取上传目录下的文件（论文 PDF / 活动横幅）
    pub async fn serve_file(
        &self,
        request: &HttpRequest,
        category: String,
        filename: String,
    ) -> ActixResult<HttpResponse> {
        serve::handle_serve_file(self, request, category, filename).await
    }
}
