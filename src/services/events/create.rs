use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::EventService;
use crate::config::AppConfig;
use crate::errors::ConfSysError;
use crate::middlewares::RequireJWT;
use crate::models::events::requests::CreateEventRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate_magic_bytes;
use crate::utils::validate::validate_non_blank;

// 创建活动。multipart 表单字段：
//   title / description / date（RFC 3339）为文本字段，
//   banner 为可选的横幅图片文件。
pub async fn handle_create_event(
    service: &EventService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.banner_types;

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    let banner_dir = format!("{upload_dir}/banners");
    if !Path::new(&banner_dir).exists()
        && let Err(e) = fs::create_dir_all(&banner_dir)
    {
        tracing::error!("{}", ConfSysError::file_operation(format!("{e}")));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error_empty(
                ErrorCode::FileUploadFailed,
                "创建上传目录失败",
            )),
        );
    }

    let mut title = String::new();
    let mut description: Option<String> = None;
    let mut date_raw = String::new();
    let mut banner_url: Option<String> = None;
    let mut banner_uploaded = false;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "title" => title = read_text_field(&mut field).await?,
            "description" => {
                let text = read_text_field(&mut field).await?;
                if !text.trim().is_empty() {
                    description = Some(text);
                }
            }
            "date" => date_raw = read_text_field(&mut field).await?,
            "banner" => {
                if banner_uploaded {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MultifileUploadNotAllowed,
                        "Only one banner can be uploaded at a time",
                    )));
                }
                banner_uploaded = true;

                let original_name = content_disposition
                    .and_then(|cd| cd.get_filename())
                    .map(|s| s.to_string())
                    .unwrap_or_default();

                let extension = Path::new(&original_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| format!(".{}", ext.to_lowercase()))
                    .unwrap_or_default();

                if !allowed_types.iter().any(|t| t.to_lowercase() == extension) {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::FileTypeNotAllowed,
                        "Banner file type not allowed",
                    )));
                }

                let stored_name = format!(
                    "{}-{}{extension}",
                    chrono::Utc::now().timestamp(),
                    Uuid::new_v4()
                );
                let file_path = format!("{banner_dir}/{stored_name}");
                let mut f = match File::create(&file_path) {
                    Ok(file) => file,
                    Err(e) => {
                        tracing::error!("{}", ConfSysError::file_operation(format!("{e}")));
                        return Ok(HttpResponse::InternalServerError().json(
                            ApiResponse::<()>::error_empty(
                                ErrorCode::FileUploadFailed,
                                "文件创建失败",
                            ),
                        ));
                    }
                };

                let mut total_size: usize = 0;
                let mut first_chunk = true;
                while let Some(chunk) = field.next().await {
                    let data = chunk?;

                    // 第一个 chunk 时验证魔术字节
                    if first_chunk {
                        first_chunk = false;
                        if !validate_magic_bytes(&data, &extension) {
                            let _ = fs::remove_file(&file_path);
                            return Ok(HttpResponse::BadRequest().json(
                                ApiResponse::error_empty(
                                    ErrorCode::FileTypeNotAllowed,
                                    "文件内容与扩展名不匹配",
                                ),
                            ));
                        }
                    }

                    total_size += data.len();
                    if total_size > max_size {
                        let _ = fs::remove_file(&file_path);
                        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::FileSizeExceeded,
                            "File size exceeds the limit",
                        )));
                    }
                    f.write_all(&data)?;
                }

                banner_url = Some(format!("/uploads/banners/{stored_name}"));
            }
            _ => {}
        }
    }

    if let Err(msg) = validate_non_blank(&title, "title") {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }

    let date = match chrono::DateTime::parse_from_rfc3339(&date_raw) {
        Ok(d) => d.with_timezone(&chrono::Utc),
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::InvalidParams,
                "Invalid event date, expected RFC 3339 format",
            )));
        }
    };

    let storage = service.get_storage(request);
    let create_request = CreateEventRequest {
        title,
        description,
        date,
        banner_url,
        created_by: user_id,
    };

    match storage.create_event(create_request).await {
        Ok(event) => {
            tracing::info!("Event '{}' created by user {}", event.title, user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(event, "活动创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建活动失败: {e}"),
            )),
        ),
    }
}

// 读取 multipart 文本字段内容
async fn read_text_field(field: &mut actix_multipart::Field) -> ActixResult<String> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&bytes).to_string())
}
