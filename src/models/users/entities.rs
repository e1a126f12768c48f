use serde::{Deserialize, Serialize};

use crate::models::common::choices::define_choices;
use crate::utils::jwt::{JwtUtils, TokenPair};

define_choices! {
    /// 用户角色
    UserRole {
        Admin => "admin",
        Staff => "staff",
        Student => "student",
    }
}

define_choices! {
    /// 用户状态
    UserStatus {
        Active => "active",
        Inactive => "inactive",
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub display_name: Option<String>,
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    // 生成 token 对（access + refresh）
    pub fn generate_token_pair(&self) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        JwtUtils::generate_token_pair(self.id, self.role.as_str())
    }
}
