pub mod detail;
pub mod my;
pub mod status;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::papers::requests::TransitionStatusRequest;
use crate::storage::Storage;

pub struct PaperService {
    storage: Option<Arc<dyn Storage>>,
}

impl PaperService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 投稿（multipart：文本字段 + PDF 文件）
    pub async fn upload_paper(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::handle_upload_paper(self, request, payload).await
    }

    // 当前用户的投稿列表
    pub async fn list_my_papers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        my::handle_list_my_papers(self, request).await
    }

    // 论文详情
    pub async fn get_paper(
        &self,
        request: &HttpRequest,
        paper_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_paper(self, request, paper_id).await
    }

    // 论文状态迁移
    pub async fn transition_status(
        &self,
        request: &HttpRequest,
        paper_id: i64,
        body: TransitionStatusRequest,
    ) -> ActixResult<HttpResponse> {
        status::handle_transition_status(self, request, paper_id, body).await
    }
}
