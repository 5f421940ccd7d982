use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::UploadService;
use crate::config::AppConfig;
use crate::errors::ConfSysError;
use crate::models::{ApiResponse, ErrorCode};

// 上传目录只有这两个子目录对外可见
const ALLOWED_CATEGORIES: [&str; 2] = ["papers", "banners"];

pub async fn handle_serve_file(
    _service: &UploadService,
    _request: &HttpRequest,
    category: String,
    filename: String,
) -> ActixResult<HttpResponse> {
    // 拒绝路径穿越
    if !ALLOWED_CATEGORIES.contains(&category.as_str())
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        )));
    }

    let config = AppConfig::get();
    let file_path = format!("{}/{category}/{filename}", config.upload.dir);

    if !Path::new(&file_path).exists() {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        )));
    }

    let mut file = match File::open(&file_path) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("{:?}", ConfSysError::file_operation(format!("{e:?}")));
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "File open failed",
                )),
            );
        }
    };

    let mut buf = Vec::new();
    if file.read_to_end(&mut buf).is_err() {
        tracing::error!("{:?}", ConfSysError::file_operation("File read failed"));
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "File read failed",
            )),
        );
    }

    let content_type = content_type_for(&filename);

    Ok(HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, content_type))
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{filename}\""),
        ))
        .body(buf))
}

// 按扩展名推断 Content-Type，未知类型按二进制流处理
fn content_type_for(filename: &str) -> &'static str {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_mapping() {
        assert_eq!(content_type_for("paper.pdf"), "application/pdf");
        assert_eq!(content_type_for("banner.PNG"), "image/png");
        assert_eq!(content_type_for("photo.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("blob"), "application/octet-stream");
    }
}
