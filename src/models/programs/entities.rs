use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;

define_choices! {
    /// 学位类型
    ProgramType {
        Bachelor => "BS",
        Master => "MS",
        Doctorate => "PhD",
        Diploma => "Diploma",
    }
}

// 专业实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub program_number: i32,
    pub name: String,
    pub code: String,
    pub program_type: ProgramType,
    pub department_id: i64,
    pub duration_years: i32,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
