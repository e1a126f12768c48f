use crate::models::users::entities::User;
use serde::Serialize;

// 登录响应
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access: String,
    pub refresh: String,
    /// access token 有效期（秒）
    pub access_expires_in: i64,
    pub user: User,
}

// 刷新响应：新的 access token 与轮换后的 refresh token
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access: String,
    pub refresh: String,
    pub access_expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct TokenVerificationResponse {
    pub is_valid: bool,
    pub token_type: String,
}
