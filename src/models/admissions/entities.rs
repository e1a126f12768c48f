use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;

define_choices! {
    /// 录取状态
    AdmissionStatus {
        Pending => "Pending",
        Approved => "Approved",
        Rejected => "Rejected",
    }
}

// 录取记录，每个学生至多一条
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admission {
    pub id: i64,
    pub student_id: i64,
    pub program_id: i64,
    pub admission_date: NaiveDate,
    pub status: AdmissionStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
