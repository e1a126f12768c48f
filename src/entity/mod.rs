//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod admissions;
pub mod attendance;
pub mod courses;
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
pub mod token_blacklist;
pub mod users;

use chrono::{DateTime, Utc};

/// Unix 秒转换为 UTC 时间
pub(crate) fn from_timestamp(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
