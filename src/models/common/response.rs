use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 业务错误码，序列化为数字
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub enum ErrorCode {
    Success = 0,

    // 通用
    InvalidParams = 1001,
    Unauthorized = 1002,
    AuthFailed = 1003,
    PermissionDenied = 1004,
    NotFound = 1005,
    RateLimited = 1006,

    // 用户/注册
    EmailAlreadyExists = 1101,
    RegisterFailed = 1102,
    RoleSetInvalid = 1103,

    // 工作流
    DuplicateAssignment = 1201,
    InvalidStatusTransition = 1202,
    ReviewNotAllowed = 1203,

    // 文件
    FileUploadFailed = 1301,
    FileTypeNotAllowed = 1302,
    MultifileUploadNotAllowed = 1303,
    FileNotFound = 1304,
    ExportFailed = 1305,
    FileSizeExceeded = 1306,

    InternalServerError = 5000,
}

// 统一的API响应结构
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct ApiResponse<T: TS> {
    pub ok: bool,
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            code: code as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sets_ok_and_code() {
        let resp = ApiResponse::success(42i64, "done");
        assert!(resp.ok);
        assert_eq!(resp.code, 0);
        assert_eq!(resp.data, Some(42));
    }

    #[test]
    fn test_error_empty_omits_data() {
        let resp = ApiResponse::error_empty(ErrorCode::NotFound, "missing");
        assert!(!resp.ok);
        assert_eq!(resp.code, ErrorCode::NotFound as i32);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("data").is_none());
    }
}
