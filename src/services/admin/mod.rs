pub mod event_stats;
pub mod reminders;
pub mod stats;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
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

    // 全局统计概览
    pub async fn get_stats(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        stats::handle_get_stats(self, request).await
    }

    // 单个活动的统计报表
    pub async fn get_event_stats(
        &self,
        request: &HttpRequest,
        event_id: i64,
    ) -> ActixResult<HttpResponse> {
        event_stats::handle_get_event_stats(self, request, event_id).await
    }

    // 审稿人催审列表
    pub async fn get_reviewer_reminders(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        reminders::handle_get_reviewer_reminders(self, request).await
    }
}
