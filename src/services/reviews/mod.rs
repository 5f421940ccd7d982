pub mod assigned;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::reviews::requests::SubmitReviewRequest;
use crate::storage::Storage;

pub struct ReviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReviewService {
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

    // 当前审稿人的审稿队列
    pub async fn list_assigned_papers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        assigned::handle_list_assigned_papers(self, request).await
    }

    // 提交/更新评审
    pub async fn submit_review(
        &self,
        request: &HttpRequest,
        paper_id: i64,
        body: SubmitReviewRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit_review(self, request, paper_id, body).await
    }

    // 论文的评审列表
    pub async fn list_reviews(
        &self,
        request: &HttpRequest,
        paper_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_reviews(self, request, paper_id).await
    }
}
