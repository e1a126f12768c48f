use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;
use serde_json::Value;

use crate::middlewares::{self, RequirePermission, Resource};
use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::services::{BulkService, StudentService};
use crate::utils::SafeIDI64;

static STUDENT_SERVICE: Lazy<StudentService> = Lazy::new(StudentService::new_lazy);
static BULK_SERVICE: Lazy<BulkService> = Lazy::new(BulkService::new_lazy);

pub async fn list_students(
    req: HttpRequest,
    query: web::Query<StudentListParams>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.list_students(query.into_inner(), &req).await
}

pub async fn create_student(
    req: HttpRequest,
    student_data: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.create_student(student_data.into_inner(), &req).await
}

pub async fn get_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.get_student(id.0, &req).await
}

pub async fn update_student(
    req: HttpRequest,
    id: SafeIDI64,
    update_data: web::Json<UpdateStudentRequest>,
) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE
        .update_student(id.0, update_data.into_inner(), &req)
        .await
}

pub async fn delete_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.delete_student(id.0, &req).await
}

pub async fn deactivate_student(req: HttpRequest, id: SafeIDI64) -> ActixResult<HttpResponse> {
    STUDENT_SERVICE.deactivate_student(id.0, &req).await
}

pub async fn bulk_create_students(
    req: HttpRequest,
    items: web::Json<Vec<Value>>,
) -> ActixResult<HttpResponse> {
    BULK_SERVICE.create_students(items.into_inner(), &req).await
}

pub async fn bulk_update_students(
    req: HttpRequest,
    items: web::Json<Vec<Value>>,
) -> ActixResult<HttpResponse> {
    BULK_SERVICE.update_students(items.into_inner(), &req).await
}

// 配置路由
pub fn configure_students_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/students")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("/bulk")
                    .wrap(RequirePermission::new(Resource::Bulk))
                    .route("", web::post().to(bulk_create_students))
                    .route("", web::put().to(bulk_update_students)),
            )
            .service(
                web::scope("")
                    .wrap(RequirePermission::new(Resource::Students))
                    .route("", web::get().to(list_students))
                    .route("", web::post().to(create_student))
                    .route("/{id}", web::get().to(get_student))
                    .route("/{id}", web::put().to(update_student))
                    .route("/{id}", web::delete().to(delete_student))
                    .route("/{id}/deactivate", web::post().to(deactivate_student)),
            ),
    );
}
