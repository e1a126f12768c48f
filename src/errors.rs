//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 实现了 `actix_web::ResponseError`，服务层可以直接用 `?` 传播。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_edusystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduSystemError {
            $($variant(String),)*
        }

        impl EduSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edusystem_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Conflict Error"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    Token("E014", "Token Error"),
}

impl EduSystemError {
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

    /// 写入失败：唯一约束冲突为 Conflict，其余为数据库操作错误
    pub fn from_write(err: sea_orm::DbErr, context: &str) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                EduSystemError::Conflict(format!("{context}: duplicate value ({detail})"))
            }
            _ => EduSystemError::DatabaseOperation(format!("{context}: {err}")),
        }
    }

    /// 对应的业务错误码
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EduSystemError::Validation(_) | EduSystemError::DateParse(_) => {
                ErrorCode::ValidationFailed
            }
            EduSystemError::NotFound(_) => ErrorCode::NotFound,
            EduSystemError::Conflict(_) => ErrorCode::Conflict,
            EduSystemError::Authentication(_) | EduSystemError::Token(_) => {
                ErrorCode::Unauthorized
            }
            EduSystemError::Authorization(_) => ErrorCode::Forbidden,
            _ => ErrorCode::InternalServerError,
        }
    }
}

impl fmt::Display for EduSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduSystemError {}

impl ResponseError for EduSystemError {
    fn status_code(&self) -> StatusCode {
        match self {
            EduSystemError::Validation(_) | EduSystemError::DateParse(_) => {
                StatusCode::BAD_REQUEST
            }
            EduSystemError::NotFound(_) => StatusCode::NOT_FOUND,
            EduSystemError::Conflict(_) => StatusCode::CONFLICT,
            EduSystemError::Authentication(_) | EduSystemError::Token(_) => {
                StatusCode::UNAUTHORIZED
            }
            EduSystemError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        // 500 不向客户端暴露内部细节
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self.format_simple());
            "Internal server error".to_string()
        } else {
            self.message().to_string()
        };
        HttpResponse::build(status).json(ApiResponse::error_empty(self.error_code(), message))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduSystemError::from_write(err, "database error")
    }
}

impl From<std::io::Error> for EduSystemError {
    fn from(err: std::io::Error) -> Self {
        EduSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EduSystemError {
    fn from(err: serde_json::Error) -> Self {
        EduSystemError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for EduSystemError {
    fn from(err: chrono::ParseError) -> Self {
        EduSystemError::DateParse(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for EduSystemError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        EduSystemError::Token(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduSystemError::cache_connection("test").code(), "E001");
        assert_eq!(EduSystemError::database_config("test").code(), "E003");
        assert_eq!(EduSystemError::validation("test").code(), "E007");
        assert_eq!(EduSystemError::authentication("test").code(), "E012");
        assert_eq!(EduSystemError::token("test").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduSystemError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            EduSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = EduSystemError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            EduSystemError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EduSystemError::authentication("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            EduSystemError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            EduSystemError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EduSystemError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            EduSystemError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_error_converts_to_internal() {
        let err: EduSystemError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
