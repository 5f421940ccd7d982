//! 路径参数安全提取器
//!
//! 将路径中的 ID 片段解析为 i64，非法输入直接返回 400 统一响应，
//! 避免在各个 handler 里重复写解析逻辑。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use std::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal, $label:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::InvalidParams,
                            concat!("无效的", $label, " ID"),
                        ));
                        Err(InternalError::from_response("invalid path id", response).into())
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeEventIdI64, "event_id", "活动");
define_safe_i64_extractor!(SafePaperIdI64, "paper_id", "论文");
