use serde::{Deserialize, Serialize};

// 职务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Designation {
    pub id: i64,
    pub title: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
