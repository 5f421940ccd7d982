pub mod accepted;
pub mod assign;
pub mod assignments;
pub mod create;
pub mod export;
pub mod list;
pub mod reviewers;
pub mod submissions;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::events::requests::AssignReviewerRequest;
use crate::storage::Storage;

pub struct EventService {
    storage: Option<Arc<dyn Storage>>,
}

impl EventService {
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

    // 创建活动（multipart：文本字段 + 可选横幅图片）
    pub async fn create_event(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_event(self, request, payload).await
    }

    // 列出全部活动
    pub async fn list_events(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_events(self, request).await
    }

    // 活动下的全部投稿
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        submissions::handle_list_submissions(self, request, event_id).await
    }

    // 可指派的审稿人列表
    pub async fn list_reviewers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        reviewers::handle_list_reviewers(self, request).await
    }

    // 指派审稿人
    pub async fn assign_reviewer(
        &self,
        request: &HttpRequest,
        event_id: i64,
        body: AssignReviewerRequest,
    ) -> ActixResult<HttpResponse> {
        assign::handle_assign_reviewer(self, request, event_id, body).await
    }

    // 活动下的指派列表
    pub async fn list_assignments(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        assignments::handle_list_assignments(self, request, event_id).await
    }

    // 活动下已接收的论文
    pub async fn list_accepted(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        accepted::handle_list_accepted(self, request, event_id).await
    }

    // 导出已接收论文的 XLSX 报表
    pub async fn export_accepted(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        export::handle_export_accepted(self, request, event_id).await
    }
}
