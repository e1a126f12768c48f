use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::designations::requests::{
    CreateDesignationRequest, DesignationListParams, UpdateDesignationRequest,
};
use crate::services::DesignationService;
use crate::utils::SafeIDI64;

static DESIGNATION_SERVICE: Lazy<DesignationService> = Lazy::new(DesignationService::new_lazy);

pub async fn list_designations(
    req: HttpRequest,
    query: web::Query<DesignationListParams>,
) -> ActixResult<HttpResponse> {
    DESIGNATION_SERVICE.list_designations(query.into_inner(), &req).await
}

pub async fn create_designation(
    req: HttpRequest,
    designation_data: web::Json<CreateDesignationRequest>,
) -> ActixResult<HttpResponse> {
    DESIGNATION_SERVICE.create_designation(designation_data.into_inner(), &req).await
}

pub async fn get_designation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DESIGNATION_SERVICE.get_designation(id.0, &req).await
}

pub async fn update_designation(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateDesignationRequest>,
) -> ActixResult<HttpResponse> {
    DESIGNATION_SERVICE
        .update_designation(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_designation(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    DESIGNATION_SERVICE.delete_designation(id.0, &req).await
}

// 配置路由
pub fn configure_designations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/designations")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Designations))
                    .route("", web::get().to(list_designations))
                    .route("", web::post().to(create_designation))
                    .route("/{id}", web::get().to(get_designation))
                    .route("/{id}", web::put().to(update_designation))
                    .route("/{id}", web::delete().to(delete_designation)),
            ),
    );
}
