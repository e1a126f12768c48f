use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::auth::{LoginRequest, RefreshRequest, VerifyRequest};
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(login_data.into_inner(), &req).await
}

pub async fn refresh_token(
    req: HttpRequest,
    refresh_data: web::Json<RefreshRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .refresh_token(refresh_data.into_inner(), &req)
        .await
}

pub async fn verify_token(
    req: HttpRequest,
    verify_data: web::Json<VerifyRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.verify_token(verify_data.into_inner(), &req).await
}

pub async fn get_user(request: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_user(&request).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/token")
            .wrap(RateLimit::token())
            .route(web::post().to(login)),
    )
    .service(
        web::resource("/api/token/refresh")
            .wrap(RateLimit::refresh_token())
            .route(web::post().to(refresh_token)),
    )
    .route("/api/token/verify", web::post().to(verify_token))
    .service(
        web::resource("/api/me")
            .wrap(middlewares::RequireJWT)
            .route(web::get().to(get_user)),
    );
}
