use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::TryStreamExt;
use futures_util::stream::StreamExt;
use std::fs;
use std::io::Write;
use std::{fs::File, path::Path};
use uuid::Uuid;

use super::PaperService;
use crate::config::AppConfig;
use crate::errors::ConfSysError;
use crate::middlewares::RequireJWT;
use crate::models::papers::requests::CreatePaperRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate_magic_bytes;
use crate::utils::validate::validate_non_blank;

// 投稿论文。multipart 表单字段：
//   title / track / eventId 为文本字段，file 为论文 PDF。
// 新投稿总是以 submitted 状态入库。
pub async fn handle_upload_paper(
    service: &PaperService,
    request: &HttpRequest,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let config = AppConfig::get();
    let upload_dir = &config.upload.dir;
    let max_size = config.upload.max_size;
    let allowed_types = &config.upload.paper_types;

    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "用户未登录",
            )));
        }
    };

    let paper_dir = format!("{upload_dir}/papers");
    if !Path::new(&paper_dir).exists()
        && let Err(e) = fs::create_dir_all(&paper_dir)
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
    let mut track = String::new();
    let mut event_id_raw = String::new();
    let mut file_url = String::new();
    let mut file_uploaded = false;

    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = field.content_disposition();
        let name = content_disposition
            .and_then(|cd| cd.get_name())
            .unwrap_or_default()
            .to_string();

        match name.as_str() {
            "title" => title = read_text_field(&mut field).await?,
            "track" => track = read_text_field(&mut field).await?,
            "eventId" => event_id_raw = read_text_field(&mut field).await?,
            "file" => {
                if file_uploaded {
                    return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::MultifileUploadNotAllowed,
                        "Only one file can be uploaded at a time",
                    )));
                }
                file_uploaded = true;

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
                        "Only PDF submissions are accepted",
                    )));
                }

                let stored_name = format!(
                    "{}-{}{extension}",
                    chrono::Utc::now().timestamp(),
                    Uuid::new_v4()
                );
                let file_path = format!("{paper_dir}/{stored_name}");
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

                file_url = format!("/uploads/papers/{stored_name}");
            }
            _ => {}
        }
    }

    if let Err(msg) = validate_non_blank(&title, "title") {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }
    if let Err(msg) = validate_non_blank(&track, "track") {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::InvalidParams, msg))
        );
    }
    if !file_uploaded {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "No paper file found in upload payload",
        )));
    }

    let storage = service.get_storage(request);

    // eventId 可选，提供时必须指向存在的活动
    let event_id = if event_id_raw.trim().is_empty() {
        None
    } else {
        match event_id_raw.trim().parse::<i64>() {
            Ok(id) if id > 0 => match storage.get_event_by_id(id).await {
                Ok(Some(_)) => Some(id),
                Ok(None) => {
                    return Ok(HttpResponse::NotFound()
                        .json(ApiResponse::error_empty(ErrorCode::NotFound, "活动不存在")));
                }
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("查询活动失败: {e}"),
                        ),
                    ));
                }
            },
            _ => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::InvalidParams,
                    "Invalid eventId",
                )));
            }
        }
    };

    let create_request = CreatePaperRequest {
        title,
        track,
        event_id,
        file_url,
        author_id: user_id,
    };

    match storage.create_paper(create_request).await {
        Ok(paper) => {
            tracing::info!("Paper '{}' submitted by user {}", paper.title, user_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(paper, "投稿成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("投稿失败: {e}"),
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
