use serde::Deserialize;

// 用户登录请求
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// 用户名或邮箱
    pub username: String,
    pub password: String,
}

// 刷新令牌请求
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

// 令牌校验请求
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub token: String,
}
