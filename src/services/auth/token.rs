use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use jsonwebtoken::errors::ErrorKind;
use tracing::{error, info};

use crate::middlewares::RequireJWT;
use crate::models::auth::{
    RefreshRequest, RefreshResponse, TokenVerificationResponse, VerifyRequest,
};
use crate::errors::EduSystemError;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

use super::AuthService;

fn token_rejected(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(code, message))
}

fn decode_failure(err: &jsonwebtoken::errors::Error) -> HttpResponse {
    match err.kind() {
        ErrorKind::ExpiredSignature => token_rejected(ErrorCode::TokenExpired, "Token is expired"),
        _ => token_rejected(ErrorCode::Unauthorized, "Token is invalid"),
    }
}

pub async fn handle_refresh_token(
    service: &AuthService,
    refresh_request: RefreshRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let claims = match JwtUtils::verify_refresh_token(&refresh_request.refresh) {
        Ok(claims) => claims,
        Err(e) => {
            info!("Refresh token rejected: {}", e);
            return Ok(decode_failure(&e));
        }
    };

    let user = match claims.user_id() {
        Some(user_id) => storage.get_user_by_id(user_id).await?,
        None => None,
    };
    let Some(user) = user.filter(|u| u.is_active()) else {
        return Ok(token_rejected(
            ErrorCode::AccountInactive,
            "User not found or inactive",
        ));
    };

    // 轮换：旧 refresh token 拉黑直到其自然过期。
    // jti 唯一，插入成功即占有本次轮换，冲突说明已被使用过
    match storage
        .blacklist_token(&claims.jti, user.id, claims.exp as i64)
        .await
    {
        Ok(()) => {}
        Err(EduSystemError::Conflict(_)) => {
            info!("Refresh token replayed for user {}", user.id);
            return Ok(token_rejected(
                ErrorCode::TokenBlacklisted,
                "Token is blacklisted",
            ));
        }
        Err(e) => return Err(e.into()),
    }

    match user.generate_token_pair() {
        Ok(pair) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            RefreshResponse {
                access: pair.access_token,
                refresh: pair.refresh_token,
                access_expires_in: config.jwt.access_token_expiry * 60,
            },
            "Token refreshed successfully",
        ))),
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Unable to generate token",
                )),
            )
        }
    }
}

pub async fn handle_verify_token(
    service: &AuthService,
    verify_request: VerifyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_token(&verify_request.token) {
        Ok(claims) => claims,
        Err(e) => return Ok(decode_failure(&e)),
    };

    let storage = service.get_storage(request);
    if storage.is_token_blacklisted(&claims.jti).await? {
        return Ok(token_rejected(
            ErrorCode::TokenBlacklisted,
            "Token is blacklisted",
        ));
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        TokenVerificationResponse {
            is_valid: true,
            token_type: claims.token_type,
        },
        "Token is valid",
    )))
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            user,
            "User information retrieved successfully",
        ))),
        None => Ok(token_rejected(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )),
    }
}
