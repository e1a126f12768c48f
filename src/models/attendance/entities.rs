use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;

define_choices! {
    /// 出勤状态
    AttendanceStatus {
        Present => "Present",
        Absent => "Absent",
        Leave => "Leave",
    }
}

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub course_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
