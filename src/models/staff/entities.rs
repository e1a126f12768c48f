use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;

define_choices! {
    /// 教职工类别
    StaffType {
        Teaching => "Teaching",
        NonTeaching => "Non-Teaching",
    }
}

// 教职工实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Staff {
    pub id: i64,
    pub user_id: Option<i64>,
    pub full_name: String,
    pub staff_type: StaffType,
    pub designation_id: Option<i64>,
    pub department_id: Option<i64>,
    pub email: String,
    pub phone: String,
    pub date_joined: NaiveDate,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
