use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::password::verify_password;

use super::AuthService;

const INVALID_CREDENTIALS: &str = "No active account found with the given credentials";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    // 1. 根据用户名或邮箱获取用户信息
    let Some(mut user) = storage
        .get_user_by_username_or_email(login_request.username.trim())
        .await?
    else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            INVALID_CREDENTIALS,
        )));
    };

    // 2. 验证密码
    if !verify_password(&login_request.password, &user.password_hash) {
        info!("Login failed for {}: wrong password", user.username);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            INVALID_CREDENTIALS,
        )));
    }

    if !user.is_active() {
        info!("Login rejected for inactive user {}", user.username);
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AccountInactive,
            INVALID_CREDENTIALS,
        )));
    }

    // 3. 更新最后登录时间
    match storage.update_last_login(user.id).await {
        Ok(_) => user.last_login = Some(chrono::Utc::now()),
        Err(e) => warn!("Failed to update last login for {}: {}", user.username, e),
    }

    // 4. 生成令牌对
    match user.generate_token_pair() {
        Ok(token_pair) => {
            info!("User {} logged in successfully", user.username);

            let response = LoginResponse {
                access: token_pair.access_token,
                refresh: token_pair.refresh_token,
                access_expires_in: config.jwt.access_token_expiry * 60,
                user,
            };

            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
        }
        Err(e) => {
            tracing::error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            )
        }
    }
}
