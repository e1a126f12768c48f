use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::fees::requests::{CreateFeeRequest, FeeListParams, UpdateFeeRequest};
use crate::services::FeeService;
use crate::utils::SafeIDI64;

static FEE_SERVICE: Lazy<FeeService> = Lazy::new(FeeService::new_lazy);

pub async fn list_fees(
    req: HttpRequest,
    query: web::Query<FeeListParams>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.list_fees(query.into_inner(), &req).await
}

pub async fn create_fee(
    req: HttpRequest,
    fee_data: web::Json<CreateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE.create_fee(fee_data.into_inner(), &req).await
}

pub async fn get_fee(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.get_fee(id.0, &req).await
}

pub async fn update_fee(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateFeeRequest>,
) -> ActixResult<HttpResponse> {
    FEE_SERVICE
        .update_fee(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_fee(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.delete_fee(id.0, &req).await
}

pub async fn mark_fee_paid(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    FEE_SERVICE.mark_fee_paid(id.0, &req).await
}

// 配置路由
pub fn configure_fees_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/fees")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Fees))
                    .route("", web::get().to(list_fees))
                    .route("", web::post().to(create_fee))
                    .route("/{id}", web::get().to(get_fee))
                    .route("/{id}", web::put().to(update_fee))
                    .route("/{id}", web::delete().to(delete_fee))
                    .route("/{id}/mark_paid", web::post().to(mark_fee_paid)),
            ),
    );
}
