use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;

define_choices! {
    /// 考试类型
    ExamType {
        Midterm => "Midterm",
        Final => "Final",
        Quiz => "Quiz",
        Assignment => "Assignment",
    }
}

// 考试实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub course_id: i64,
    pub exam_type: ExamType,
    pub date: NaiveDate,
    pub total_marks: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
