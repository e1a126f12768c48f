use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentListParams, UpdateEnrollmentRequest,
};
use crate::services::EnrollmentService;
use crate::utils::SafeIDI64;

static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.list_enrollments(query.into_inner(), &req).await
}

pub async fn create_enrollment(
    req: HttpRequest,
    enrollment_data: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.create_enrollment(enrollment_data.into_inner(), &req).await
}

pub async fn get_enrollment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.get_enrollment(id.0, &req).await
}

pub async fn update_enrollment(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .update_enrollment(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_enrollment(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_enrollment(id.0, &req).await
}

// 配置路由
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/enrollments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Enrollments))
                    .route("", web::get().to(list_enrollments))
                    .route("", web::post().to(create_enrollment))
                    .route("/{id}", web::get().to(get_enrollment))
                    .route("/{id}", web::put().to(update_enrollment))
                    .route("/{id}", web::delete().to(delete_enrollment)),
            ),
    );
}
