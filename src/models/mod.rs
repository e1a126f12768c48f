pub mod admissions;
pub mod attendance;
pub mod auth;
pub mod bulk;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod departments;
pub mod designations;
pub mod enrollments;
pub mod exams;
pub mod fees;
pub mod grades;
pub mod notifications;
pub mod programs;
pub mod staff;
pub mod students;
pub mod users;

use serde::Serialize;

pub use common::{
    ActionStatus, ApiResponse, ListQuery, PaginatedResponse, PaginationInfo, PaginationQuery,
    RowScope,
};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidFilter = 1002,
    BulkValidationFailed = 1003,

    // 认证授权 2xxx
    Unauthorized = 2000,
    AuthFailed = 2001,
    TokenExpired = 2002,
    TokenBlacklisted = 2003,
    AccountInactive = 2004,
    Forbidden = 2010,

    // 资源 3xxx
    NotFound = 3000,
    Conflict = 3001,

    // 限流 4xxx
    RateLimitExceeded = 4029,

    // 服务端 5xxx
    InternalServerError = 5000,
    BulkPersistFailed = 5001,
}
