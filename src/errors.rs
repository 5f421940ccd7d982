//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_confsys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ConfSysError {
            $($variant(String),)*
        }

        impl ConfSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ConfSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ConfSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ConfSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ConfSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ConfSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_confsys_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    Conflict("E014", "Conflict Error"),
    InvalidTransition("E015", "Invalid Status Transition"),
}

impl ConfSysError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ConfSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ConfSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ConfSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        ConfSysError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ConfSysError {
    fn from(err: std::io::Error) -> Self {
        ConfSysError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ConfSysError {
    fn from(err: serde_json::Error) -> Self {
        ConfSysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ConfSysError {
    fn from(err: chrono::ParseError) -> Self {
        ConfSysError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ConfSysError::cache_connection("test").code(), "E001");
        assert_eq!(ConfSysError::validation("test").code(), "E007");
        assert_eq!(ConfSysError::conflict("test").code(), "E014");
        assert_eq!(ConfSysError::invalid_transition("test").code(), "E015");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ConfSysError::conflict("duplicate").error_type(),
            "Conflict Error"
        );
        assert_eq!(
            ConfSysError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_format_simple() {
        let err = ConfSysError::invalid_transition("accepted -> submitted");
        let formatted = err.format_simple();
        assert!(formatted.contains("Invalid Status Transition"));
        assert!(formatted.contains("accepted -> submitted"));
    }
}
