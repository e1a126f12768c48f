use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::admissions::requests::{
    AdmissionListParams, CreateAdmissionRequest, UpdateAdmissionRequest,
};
use crate::services::AdmissionService;
use crate::utils::SafeIDI64;

static ADMISSION_SERVICE: Lazy<AdmissionService> = Lazy::new(AdmissionService::new_lazy);

pub async fn list_admissions(
    req: HttpRequest,
    query: web::Query<AdmissionListParams>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.list_admissions(query.into_inner(), &req).await
}

pub async fn create_admission(
    req: HttpRequest,
    admission_data: web::Json<CreateAdmissionRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.create_admission(admission_data.into_inner(), &req).await
}

pub async fn get_admission(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.get_admission(id.0, &req).await
}

pub async fn update_admission(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateAdmissionRequest>,
) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE
        .update_admission(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_admission(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ADMISSION_SERVICE.delete_admission(id.0, &req).await
}

// 配置路由
pub fn configure_admissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admissions")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Admissions))
                    .route("", web::get().to(list_admissions))
                    .route("", web::post().to(create_admission))
                    .route("/{id}", web::get().to(get_admission))
                    .route("/{id}", web::put().to(update_admission))
                    .route("/{id}", web::delete().to(delete_admission)),
            ),
    );
}
